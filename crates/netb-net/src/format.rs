//! Text serialisers shared by every construction family.

use crate::bitmatrix::BitMatrix;

/// Bits of `row` in column order, joined by `separator`.
pub fn row_digits(matrix: &BitMatrix, row: usize, separator: &str) -> String {
    (0..matrix.cols())
        .map(|col| if matrix.get(row, col) { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Bit-row layout read by the notebook front end.
///
/// Each coordinate starts with a `//dim <j>` marker, followed by one line per
/// matrix row where every bit is followed by a space, and ends with an empty
/// line.
pub fn render_gui(matrices: &[BitMatrix]) -> String {
    let mut out = String::new();
    for (coord, matrix) in matrices.iter().enumerate() {
        out.push_str(&format!("//dim {}\n", coord));
        for row in 0..matrix.rows() {
            for col in 0..matrix.cols() {
                out.push(if matrix.get(row, col) { '1' } else { '0' });
                out.push(' ');
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Integer-column layout understood by SSJ's `DigitalNetBase2FromFile`.
pub fn render_ssj(matrices: &[BitMatrix]) -> String {
    let cols = matrices.first().map(BitMatrix::cols).unwrap_or(0);
    let rows = matrices.first().map(BitMatrix::rows).unwrap_or(0);
    let mut out = String::from("# Parameters for a digital net in base 2\n");
    out.push_str(&format!("{}    # dimension s\n", matrices.len()));
    out.push_str(&format!("{}    # k = number of columns (2^k points)\n", cols));
    out.push_str(&format!("{}    # r = number of rows (output digits)\n", rows));
    out.push_str("# columns of the generating matrices, one block per coordinate;\n");
    out.push_str("# row 0 is the most significant of the r bits\n");
    for matrix in matrices {
        out.push('\n');
        for col in 0..matrix.cols() {
            out.push_str(&format!("{}\n", matrix.column_as_integer(col)));
        }
    }
    out
}
