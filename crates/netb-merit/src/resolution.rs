//! Resolution gap.
//!
//! The resolution of an `s`-dimensional net with `m` columns is the largest
//! `l <= floor(m / s)` such that the first `l` rows of every generating matrix
//! are jointly independent. The gap is `floor(m / s)` minus that resolution.

use netb_net::{BitMatrix, EchelonBasis};

use crate::tvalue::leading_rows;

/// Resolution of the net formed by the first `m` columns of `matrices`.
pub fn resolution(matrices: &[BitMatrix], m: usize) -> usize {
    if matrices.is_empty() {
        return 0;
    }
    let rows = leading_rows(matrices, m);
    let ceiling = m / matrices.len();
    let mut basis = EchelonBasis::new();
    for level in 1..=ceiling {
        for coord_rows in &rows {
            let independent = coord_rows
                .get(level - 1)
                .map(|&row| basis.insert(row))
                .unwrap_or(false);
            if !independent {
                return level - 1;
            }
        }
    }
    ceiling
}

/// Resolution gap; `None` when the gap reaches `abort_at`.
pub fn resolution_gap(matrices: &[BitMatrix], m: usize, abort_at: Option<usize>) -> Option<usize> {
    let ceiling = if matrices.is_empty() { 0 } else { m / matrices.len() };
    let gap = ceiling - resolution(matrices, m);
    match abort_at {
        Some(bound) if gap >= bound => None,
        _ => Some(gap),
    }
}
