//! Compact hexadecimal rendering of a board.

use super::Grid;

/// Render a grid as compact hex: every 4 cells in row-major order fold into
/// one nibble, printed as an uppercase hex character, one line per grid row.
///
/// A trailing group on a row whose width is not a multiple of 4 is
/// zero-padded on the right before conversion, so a 6-wide row still
/// renders as 2 characters.
pub fn compact_hex(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.columns() / 4 + 2));

    for row in 0..grid.rows() {
        let cells = grid.row(row);
        for group in cells.chunks(4) {
            let mut nibble = 0u32;
            for (i, &alive) in group.iter().enumerate() {
                if alive {
                    nibble |= 1 << (3 - i);
                }
            }
            // Nibbles are always < 16
            out.push(
                char::from_digit(nibble, 16)
                    .unwrap_or('0')
                    .to_ascii_uppercase(),
            );
        }
        out.push('\n');
    }

    out
}
