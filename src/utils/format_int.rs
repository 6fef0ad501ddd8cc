use std::fmt;

/// Integer printed with thousands separators, e.g. `1'234'567`.
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from(value: impl Into<i128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as i128)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&with_delimiters(self.0))
    }
}

fn with_delimiters(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() * 4 / 3 + 1);
    if value < 0 {
        result.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            result.push('\'');
        }
        result.push(c);
    }
    result
}
