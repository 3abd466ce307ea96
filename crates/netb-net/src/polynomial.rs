use netb_core::{ErrorInfo, NetBuilderError, NetConstruction, RngHandle};
use rand::RngCore;

use crate::bitmatrix::BitMatrix;
use crate::construction::{design_error, genvalue_error, ConstructionMethod, Polynomial};
use crate::gf2poly::{first_primitive_of_degree, Gf2Poly};

/// Design of a polynomial lattice rule: the modulus `P(z)` of degree `m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialDesign {
    m: usize,
    modulus: Gf2Poly,
}

impl PolynomialDesign {
    /// Modulus of the rule.
    pub fn modulus(&self) -> Gf2Poly {
        self.modulus
    }
}

/// Coefficients `u_1, ..., u_{2m-1}` of the Laurent expansion of `q(z) / P(z)`.
fn laurent_digits(q: Gf2Poly, modulus: Gf2Poly, m: usize) -> Vec<bool> {
    let mut digits = Vec::with_capacity(2 * m);
    for l in 1..2 * m {
        let mut digit = l <= m && q.coefficient(m - l);
        for k in 1..l.min(m + 1) {
            if modulus.coefficient(m - k) && digits[l - k - 1] {
                digit = !digit;
            }
        }
        digits.push(digit);
    }
    digits
}

impl ConstructionMethod for Polynomial {
    const TAG: NetConstruction = NetConstruction::Polynomial;
    const NAME: &'static str = "Polynomial";

    type DesignParameter = PolynomialDesign;
    /// Generating polynomial `q_j(z)` with `deg q_j < m`.
    type GenValue = Gf2Poly;

    fn parse_design_parameter(
        text: &str,
        m: usize,
        _dimension: usize,
    ) -> Result<PolynomialDesign, NetBuilderError> {
        let text = text.trim();
        let modulus = if text.is_empty() {
            first_primitive_of_degree(m).ok_or_else(|| {
                NetBuilderError::Configuration(
                    ErrorInfo::new("polynomial_default_modulus", "no default modulus for this size")
                        .with_context("m", m.to_string()),
                )
            })?
        } else {
            Gf2Poly::from_binary_str(text).ok_or_else(|| {
                design_error(
                    "polynomial_modulus",
                    "modulus must be written as binary coefficients, highest degree first",
                    text,
                )
            })?
        };
        if modulus.degree() != Some(m) {
            return Err(NetBuilderError::Configuration(
                ErrorInfo::new(
                    "polynomial_modulus_degree",
                    "modulus degree does not match the net size",
                )
                .with_context("modulus", modulus.to_string())
                .with_context("m", m.to_string()),
            ));
        }
        Ok(PolynomialDesign { m, modulus })
    }

    fn columns(design: &PolynomialDesign) -> usize {
        design.m
    }

    fn space_size(design: &PolynomialDesign, coord: usize) -> Option<u64> {
        if coord == 0 {
            Some(1)
        } else {
            Some((1u64 << design.m) - 1)
        }
    }

    fn genvalue_at(_design: &PolynomialDesign, coord: usize, index: u64) -> Gf2Poly {
        if coord == 0 {
            Gf2Poly::ONE
        } else {
            Gf2Poly::from_bits(index + 1)
        }
    }

    fn random_genvalue(design: &PolynomialDesign, coord: usize, rng: &mut RngHandle) -> Gf2Poly {
        if coord == 0 {
            return Gf2Poly::ONE;
        }
        let choices = (1u64 << design.m) - 1;
        Gf2Poly::from_bits(1 + rng.next_u64() % choices)
    }

    fn parse_genvalue(
        design: &PolynomialDesign,
        coord: usize,
        text: &str,
    ) -> Result<Gf2Poly, NetBuilderError> {
        let poly = Gf2Poly::from_binary_str(text).ok_or_else(|| {
            genvalue_error("polynomial_genvalue", "invalid binary polynomial", coord, text)
        })?;
        match poly.degree() {
            Some(degree) if degree < design.m => Ok(poly),
            _ => Err(genvalue_error(
                "polynomial_genvalue_degree",
                "generating polynomial must be nonzero with degree below the modulus degree",
                coord,
                text,
            )),
        }
    }

    fn create_matrix(design: &PolynomialDesign, _coord: usize, genvalue: &Gf2Poly) -> BitMatrix {
        let m = design.m;
        let digits = laurent_digits(*genvalue, design.modulus, m);
        let mut matrix = BitMatrix::zeros(m, m);
        for row in 0..m {
            for col in 0..m {
                if digits[row + col] {
                    matrix.set(row, col, true);
                }
            }
        }
        matrix
    }

    fn format_genvalues(design: &PolynomialDesign, genvalues: &[Gf2Poly]) -> String {
        let mut out = format!("Modulus =\n  {}\nGeneratingVector =\n", design.modulus);
        for poly in genvalues {
            out.push_str(&format!("  {}\n", poly));
        }
        out
    }
}
