use netb_core::{ErrorInfo, NetBuilderError, NetConstruction, RngHandle};
use rand::RngCore;

use crate::bitmatrix::BitMatrix;
use crate::construction::{design_error, genvalue_error, ConstructionMethod, Sobol};
use crate::gf2poly::{primitive_polynomials, Gf2Poly};

/// Design of a Sobol net: its column count and one primitive polynomial per
/// coordinate after the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SobolDesign {
    m: usize,
    polynomials: Vec<Gf2Poly>,
}

impl SobolDesign {
    /// Builds the design for `2^m` points in `dimension` coordinates.
    pub fn new(m: usize, dimension: usize) -> Result<Self, NetBuilderError> {
        let needed = dimension.saturating_sub(1);
        let polynomials = primitive_polynomials(needed);
        if polynomials.len() < needed {
            return Err(NetBuilderError::Configuration(
                ErrorInfo::new("sobol_dimension", "dimension exceeds the Sobol polynomial table")
                    .with_context("dimension", dimension.to_string()),
            ));
        }
        Ok(Self { m, polynomials })
    }

    /// Primitive polynomial attached to `coord`, `None` for the first coordinate.
    pub fn polynomial(&self, coord: usize) -> Option<Gf2Poly> {
        coord
            .checked_sub(1)
            .and_then(|idx| self.polynomials.get(idx).copied())
    }

    fn degree(&self, coord: usize) -> usize {
        self.polynomial(coord)
            .and_then(|poly| poly.degree())
            .unwrap_or(0)
    }
}

impl ConstructionMethod for Sobol {
    const TAG: NetConstruction = NetConstruction::Sobol;
    const NAME: &'static str = "Sobol";

    type DesignParameter = SobolDesign;
    /// Initial direction numbers `m_1, ..., m_d`; empty for the first coordinate.
    type GenValue = Vec<u64>;

    fn parse_design_parameter(
        text: &str,
        m: usize,
        dimension: usize,
    ) -> Result<SobolDesign, NetBuilderError> {
        if !text.trim().is_empty() {
            return Err(design_error(
                "sobol_design",
                "the sobol construction takes no design parameter",
                text,
            ));
        }
        SobolDesign::new(m, dimension)
    }

    fn columns(design: &SobolDesign) -> usize {
        design.m
    }

    fn space_size(design: &SobolDesign, coord: usize) -> Option<u64> {
        let degree = design.degree(coord);
        let free_bits = degree * degree.saturating_sub(1) / 2;
        if free_bits >= 64 {
            None
        } else {
            Some(1u64 << free_bits)
        }
    }

    fn genvalue_at(design: &SobolDesign, coord: usize, mut index: u64) -> Vec<u64> {
        let degree = design.degree(coord);
        let mut numbers = Vec::with_capacity(degree);
        for k in 1..=degree {
            let free = k - 1;
            let low = index & ((1u64 << free) - 1);
            index >>= free;
            numbers.push((low << 1) | 1);
        }
        numbers
    }

    fn random_genvalue(design: &SobolDesign, coord: usize, rng: &mut RngHandle) -> Vec<u64> {
        (1..=design.degree(coord))
            .map(|k| ((rng.next_u64() & ((1u64 << (k - 1)) - 1)) << 1) | 1)
            .collect()
    }

    fn parse_genvalue(
        design: &SobolDesign,
        coord: usize,
        text: &str,
    ) -> Result<Vec<u64>, NetBuilderError> {
        let text = text.trim();
        if coord == 0 {
            return if text == "1" {
                Ok(Vec::new())
            } else {
                Err(genvalue_error(
                    "sobol_first_coordinate",
                    "the first Sobol coordinate is the identity and must be written `1`",
                    coord,
                    text,
                ))
            };
        }
        let degree = design.degree(coord);
        let numbers = text
            .split(',')
            .map(|item| item.trim().parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| {
                genvalue_error("sobol_direction_numbers", "invalid direction number", coord, text)
            })?;
        if numbers.len() != degree {
            return Err(genvalue_error(
                "sobol_direction_count",
                format!("expected {degree} direction numbers"),
                coord,
                text,
            ));
        }
        for (idx, &value) in numbers.iter().enumerate() {
            let k = idx + 1;
            if value & 1 == 0 || value >= (1u64 << k) {
                return Err(genvalue_error(
                    "sobol_direction_range",
                    format!("direction number m_{k} must be odd and below 2^{k}"),
                    coord,
                    text,
                ));
            }
        }
        Ok(numbers)
    }

    fn create_matrix(design: &SobolDesign, coord: usize, genvalue: &Vec<u64>) -> BitMatrix {
        let m = design.m;
        let Some(poly) = design.polynomial(coord) else {
            return BitMatrix::identity(m);
        };
        let degree = genvalue.len();
        let mut direction: Vec<u64> = Vec::with_capacity(m);
        for k in 1..=m {
            let value = if k <= degree {
                genvalue[k - 1]
            } else {
                let base = direction[k - degree - 1];
                let mut value = base ^ (base << degree);
                for i in 1..degree {
                    if poly.coefficient(degree - i) {
                        value ^= direction[k - i - 1] << i;
                    }
                }
                value
            };
            direction.push(value);
        }
        let mut matrix = BitMatrix::zeros(m, m);
        for (col, &value) in direction.iter().enumerate() {
            let k = col + 1;
            for row in 0..k {
                if (value >> (k - 1 - row)) & 1 == 1 {
                    matrix.set(row, col, true);
                }
            }
        }
        matrix
    }

    fn format_genvalues(_design: &SobolDesign, genvalues: &[Vec<u64>]) -> String {
        let mut out = String::from("Direction numbers = (\n");
        for (coord, numbers) in genvalues.iter().enumerate() {
            if coord == 0 {
                out.push_str("  1\n");
                continue;
            }
            let line: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
            out.push_str("  ");
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out.push_str(")\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_coordinate_is_identity() {
        let design = SobolDesign::new(6, 3).unwrap();
        let matrix = Sobol::create_matrix(&design, 0, &Vec::new());
        assert_eq!(matrix, BitMatrix::identity(6));
    }

    #[test]
    fn second_coordinate_is_pascal_matrix_mod_two() {
        let design = SobolDesign::new(4, 2).unwrap();
        let matrix = Sobol::create_matrix(&design, 1, &vec![1]);
        // direction numbers 1, 3, 5, 15 give the upper triangular Pascal matrix
        let expected = BitMatrix::from_rows(4, vec![0b1111, 0b1010, 0b1100, 0b1000]);
        assert_eq!(matrix, expected);
    }

    #[test]
    fn candidate_enumeration_covers_odd_values() {
        let design = SobolDesign::new(8, 4).unwrap();
        // coordinate 3 uses a degree-3 polynomial: 1 * 2 * 4 candidates
        assert_eq!(Sobol::space_size(&design, 3), Some(8));
        let all: Vec<Vec<u64>> = (0..8).map(|i| Sobol::genvalue_at(&design, 3, i)).collect();
        for numbers in &all {
            assert_eq!(numbers.len(), 3);
            assert_eq!(numbers[0], 1);
            assert!(numbers[1] == 1 || numbers[1] == 3);
            assert!(numbers[2] % 2 == 1 && numbers[2] < 8);
        }
        let mut dedup = all.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 8);
    }

    #[test]
    fn direction_numbers_are_validated() {
        let design = SobolDesign::new(8, 3).unwrap();
        assert!(Sobol::parse_genvalue(&design, 2, "1,3").is_ok());
        assert!(Sobol::parse_genvalue(&design, 2, "1,2").is_err());
        assert!(Sobol::parse_genvalue(&design, 2, "1").is_err());
        assert!(Sobol::parse_genvalue(&design, 0, "3").is_err());
    }
}
