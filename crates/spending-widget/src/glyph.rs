//! Built-in 5x7 bitmap font for the chart's center label.
//!
//! Each glyph is seven rows of five bits, `0x10` being the leftmost column.
//! Lowercase letters render as uppercase; characters outside the table are
//! skipped by the rasterizer.

/// Glyph width in cells.
pub(crate) const GLYPH_WIDTH: u32 = 5;
/// Glyph height in cells.
pub(crate) const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in cells, including one cell of spacing.
pub(crate) const ADVANCE: u32 = GLYPH_WIDTH + 1;
/// Line pitch in cells, including one cell of leading.
pub(crate) const LINE_PITCH: u32 = GLYPH_HEIGHT + 1;

type Rows = [u8; GLYPH_HEIGHT as usize];

/// Bit rows for `c`.
#[must_use]
pub(crate) fn rows(c: char) -> Option<Rows> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        ' ' => [0x00; 7],
        _ => return None,
    };
    Some(rows)
}

/// Lit cells of `c` as `(column, row)` pairs.
pub(crate) fn cells(c: char) -> impl Iterator<Item = (u32, u32)> {
    let rows = rows(c).unwrap_or_default();
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        let bits = rows[row as usize];
        (0..GLYPH_WIDTH)
            .filter(move |col| bits & (0x10 >> col) != 0)
            .map(move |col| (col, row))
    })
}

/// Width of `line` in cells, counting only renderable characters.
#[must_use]
pub(crate) fn line_width(line: &str) -> u32 {
    let count = line.chars().filter(|&c| rows(c).is_some()).count();
    u32::try_from(count)
        .unwrap_or(u32::MAX / ADVANCE)
        .saturating_mul(ADVANCE)
        .saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(rows('t'), rows('T'));
        assert!(rows('T').is_some());
    }

    #[test]
    fn test_unknown_is_none() {
        assert!(rows('₫').is_none());
        assert!(rows('ă').is_none());
        assert_eq!(cells('₫').count(), 0);
    }

    #[test]
    fn test_cells_of_t() {
        let lit: Vec<_> = cells('T').collect();
        assert_eq!(lit.len(), 5 + 6);
        assert!(lit.contains(&(0, 0)));
        assert!(lit.contains(&(2, 6)));
        assert!(!lit.contains(&(0, 1)));
    }

    #[test]
    fn test_rows_fit_five_columns() {
        for c in ('A'..='Z').chain('0'..='9').chain("%-./: ".chars()) {
            let glyph = rows(c).unwrap();
            assert!(glyph.iter().all(|row| row & !0x1F == 0), "{c}");
        }
    }

    #[test]
    fn test_line_width() {
        assert_eq!(line_width("TOP"), 17);
        assert_eq!(line_width("SPEND"), 29);
        assert_eq!(line_width(""), 0);
        assert_eq!(line_width("₫"), 0);
    }
}
