use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;

    pub const GAP_ABOVE_STATS: f32 = 30.;

    pub const UPDATES_PER_SECOND: f64 = 8.;
    pub const LIVE_CELL_BRIGHTNESS: u8 = u8::MAX;
    pub const DEAD_CELL_BRIGHTNESS: u8 = 0x20;
}
