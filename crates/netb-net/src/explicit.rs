use netb_core::{ErrorInfo, NetBuilderError, NetConstruction, RngHandle};

use crate::bitmatrix::BitMatrix;
use crate::construction::{design_error, genvalue_error, ConstructionMethod, Explicit};
use crate::format::row_digits;

/// Shape of the explicit generating matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitDesign {
    rows: usize,
    cols: usize,
}

impl ExplicitDesign {
    /// Number of output digits per coordinate.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

fn parse_extent(text: &str, whole: &str) -> Result<usize, NetBuilderError> {
    text.trim().parse::<usize>().map_err(|_| {
        design_error(
            "explicit_matrix_size",
            "matrix size must be `<rows>[,<cols>]`",
            whole,
        )
    })
}

impl ConstructionMethod for Explicit {
    const TAG: NetConstruction = NetConstruction::Explicit;
    const NAME: &'static str = "Explicit";

    type DesignParameter = ExplicitDesign;
    type GenValue = BitMatrix;

    fn parse_design_parameter(
        text: &str,
        m: usize,
        _dimension: usize,
    ) -> Result<ExplicitDesign, NetBuilderError> {
        let trimmed = text.trim();
        let (rows, cols) = if trimmed.is_empty() {
            (m, m)
        } else if let Some((rows, cols)) = trimmed.split_once(',') {
            (parse_extent(rows, text)?, parse_extent(cols, text)?)
        } else {
            let size = parse_extent(trimmed, text)?;
            (size, size)
        };
        if cols != m || rows < cols || rows >= BitMatrix::MAX_WIDTH {
            return Err(NetBuilderError::Configuration(
                ErrorInfo::new(
                    "explicit_matrix_shape",
                    "matrices need one column per size digit and at least as many rows as columns",
                )
                .with_context("rows", rows.to_string())
                .with_context("cols", cols.to_string())
                .with_context("m", m.to_string()),
            ));
        }
        Ok(ExplicitDesign { rows, cols })
    }

    fn columns(design: &ExplicitDesign) -> usize {
        design.cols
    }

    fn space_size(design: &ExplicitDesign, _coord: usize) -> Option<u64> {
        let bits = design.rows * design.cols;
        if bits >= 64 {
            None
        } else {
            Some(1u64 << bits)
        }
    }

    fn genvalue_at(design: &ExplicitDesign, _coord: usize, index: u64) -> BitMatrix {
        let row_mask = (1u64 << design.cols) - 1;
        let rows = (0..design.rows)
            .map(|row| (index >> (row * design.cols)) & row_mask)
            .collect();
        BitMatrix::from_rows(design.cols, rows)
    }

    fn random_genvalue(design: &ExplicitDesign, _coord: usize, rng: &mut RngHandle) -> BitMatrix {
        BitMatrix::random(design.rows, design.cols, rng)
    }

    fn parse_genvalue(
        design: &ExplicitDesign,
        coord: usize,
        text: &str,
    ) -> Result<BitMatrix, NetBuilderError> {
        let lines: Vec<&str> = text.split(',').map(str::trim).collect();
        if lines.len() != design.rows {
            return Err(genvalue_error(
                "explicit_row_count",
                format!("expected {} matrix rows", design.rows),
                coord,
                text,
            ));
        }
        let mut rows = Vec::with_capacity(design.rows);
        for line in lines {
            if line.len() != design.cols || !line.chars().all(|c| c == '0' || c == '1') {
                return Err(genvalue_error(
                    "explicit_row",
                    format!("each row must hold {} binary digits", design.cols),
                    coord,
                    text,
                ));
            }
            let packed = line
                .chars()
                .enumerate()
                .filter(|(_, c)| *c == '1')
                .fold(0u64, |acc, (col, _)| acc | (1u64 << col));
            rows.push(packed);
        }
        Ok(BitMatrix::from_rows(design.cols, rows))
    }

    fn create_matrix(_design: &ExplicitDesign, _coord: usize, genvalue: &BitMatrix) -> BitMatrix {
        genvalue.clone()
    }

    fn format_genvalues(_design: &ExplicitDesign, genvalues: &[BitMatrix]) -> String {
        let mut out = String::from("Matrices = (\n");
        for (coord, matrix) in genvalues.iter().enumerate() {
            out.push_str(&format!("  //dim {}\n", coord));
            for row in 0..matrix.rows() {
                out.push_str("  ");
                out.push_str(&row_digits(matrix, row, ""));
                out.push('\n');
            }
        }
        out.push_str(")\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_is_square() {
        let design = Explicit::parse_design_parameter("", 4, 2).unwrap();
        assert_eq!(design.rows(), 4);
        assert_eq!(Explicit::columns(&design), 4);
    }

    #[test]
    fn column_count_must_match_size() {
        assert!(Explicit::parse_design_parameter("5,3", 4, 2).is_err());
        assert!(Explicit::parse_design_parameter("6,4", 4, 2).is_ok());
        assert!(matches!(
            Explicit::parse_design_parameter("four", 4, 2),
            Err(NetBuilderError::Grammar(_))
        ));
    }

    #[test]
    fn rows_parse_left_to_right() {
        let design = Explicit::parse_design_parameter("2", 2, 1).unwrap();
        let matrix = Explicit::parse_genvalue(&design, 0, "10,11").unwrap();
        assert!(matrix.get(0, 0) && !matrix.get(0, 1));
        assert!(matrix.get(1, 0) && matrix.get(1, 1));
    }

    #[test]
    fn enumeration_matches_space_size() {
        let design = Explicit::parse_design_parameter("2", 2, 1).unwrap();
        assert_eq!(Explicit::space_size(&design, 0), Some(16));
        let last = Explicit::genvalue_at(&design, 0, 15);
        assert_eq!(last.packed_rows(), &[0b11, 0b11]);
    }
}
