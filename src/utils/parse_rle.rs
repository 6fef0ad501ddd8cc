use crate::{Error, Pattern, Result};

/// Parses a pattern in Life RLE format.
///
/// `#N` comment line sets the pattern name; other comment lines are skipped.
pub fn parse_rle(data: &[u8]) -> Result<Pattern> {
    let err = |pos, reason| Error::Rle { pos, reason };

    let parse_next_number = |i: &mut usize| -> Result<usize> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return Err(err(*i, "expected a number"));
            }
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        if *i == j {
            return Err(err(*i, "unexpected end of data"));
        }
        let ans = std::str::from_utf8(&data[*i..j])
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or(err(*i, "number is too large"))?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    let mut name = String::new();
    // comment lines
    while i < data.len() && data[i] == b'#' {
        let end = data[i..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(data.len(), |p| i + p);
        if data[i..end].starts_with(b"#N") {
            name = String::from_utf8_lossy(&data[i + 2..end]).trim().to_string();
        }
        i = (end + 1).min(data.len());
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(err(i, "missing header"));
    }
    let end = data[i..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(data.len(), |p| i + p);
    let header = std::str::from_utf8(&data[i..end]).map_err(|_| err(i, "malformed header"))?;
    let (mut cols, mut rows) = (None, None);
    for field in header.split(',') {
        let (key, value) = field.split_once('=').ok_or(err(i, "malformed header"))?;
        let size = || {
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| err(i, "invalid size in header"))
        };
        match key.trim() {
            "x" => cols = Some(size()?),
            "y" => rows = Some(size()?),
            _ => {}
        }
    }
    let (Some(cols), Some(rows)) = (cols, rows) else {
        return Err(err(i, "header must set both x and y"));
    };
    if rows == 0 || cols == 0 {
        return Err(err(i, "empty bounding box"));
    }
    i = end;
    // run-length encoded pattern data
    let mut cells = vec![];
    let (mut x, mut y, mut cnt): (usize, usize, usize) = (0, 0, 1);
    while i < data.len() {
        match data[i] {
            b'\n' | b'\r' | b' ' | b'\t' => i += 1,
            b'0'..=b'9' => {
                let pos = i;
                cnt = parse_next_number(&mut i)?;
                if cnt > rows.max(cols) {
                    return Err(err(pos, "run count exceeds the bounding box"));
                }
            }
            b'o' => {
                let end = x
                    .checked_add(cnt)
                    .filter(|&end| y < rows && end <= cols)
                    .ok_or(err(i, "cell outside the bounding box"))?;
                cells.extend((x..end).map(|col| (y, col)));
                (x, i, cnt) = (end, i + 1, 1);
            }
            b'b' => {
                let end = x
                    .checked_add(cnt)
                    .filter(|&end| end <= cols)
                    .ok_or(err(i, "cell outside the bounding box"))?;
                (x, i, cnt) = (end, i + 1, 1);
            }
            b'$' => {
                let next = y
                    .checked_add(cnt)
                    .filter(|&next| next <= rows)
                    .ok_or(err(i, "row outside the bounding box"))?;
                (x, y, i, cnt) = (0, next, i + 1, 1);
            }
            b'!' => break,
            _ => return Err(err(i, "unexpected symbol")),
        };
    }
    Ok(Pattern {
        name,
        rows,
        cols,
        cells,
    })
}
