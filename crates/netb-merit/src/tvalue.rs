//! t-value of digital nets in base 2.
//!
//! A net with generating matrices `C_1, ..., C_s` of `m` columns has strength
//! `k` when, for every composition `d_1 + ... + d_s = k`, the first `d_j` rows
//! of each `C_j` are jointly linearly independent. The t-value is `m` minus the
//! largest such `k`. Strength is monotone in `k`, which lets the evaluator test
//! a single strength to decide an early-abort bound.

use netb_net::{BitMatrix, EchelonBasis};

/// First `min(rows, m)` rows of each matrix restricted to its first `m` columns.
pub(crate) fn leading_rows(matrices: &[BitMatrix], m: usize) -> Vec<Vec<u64>> {
    let mask = if m >= 64 { u64::MAX } else { (1u64 << m) - 1 };
    matrices
        .iter()
        .map(|matrix| {
            matrix.packed_rows()[..matrix.rows().min(m)]
                .iter()
                .map(|row| row & mask)
                .collect()
        })
        .collect()
}

/// Whether every composition of `strength` over the coordinates yields
/// independent rows.
pub(crate) fn has_strength(rows: &[Vec<u64>], strength: usize) -> bool {
    fn recurse(rows: &[Vec<u64>], coord: usize, remaining: usize, basis: &EchelonBasis) -> bool {
        let coord_rows = &rows[coord];
        if coord + 1 == rows.len() {
            if remaining > coord_rows.len() {
                return false;
            }
            let mut basis = basis.clone();
            return coord_rows[..remaining].iter().all(|&row| basis.insert(row));
        }
        let mut current = basis.clone();
        for taken in 0..=remaining {
            if taken > 0 {
                if taken > coord_rows.len() || !current.insert(coord_rows[taken - 1]) {
                    return false;
                }
            }
            if !recurse(rows, coord + 1, remaining - taken, &current) {
                return false;
            }
        }
        true
    }

    if strength == 0 {
        return true;
    }
    if rows.is_empty() {
        return false;
    }
    recurse(rows, 0, strength, &EchelonBasis::new())
}

/// t-value of the net formed by the first `m` columns of `matrices`.
///
/// With `abort_at = Some(b)`, returns `None` as soon as the t-value is known
/// to be at least `b`.
pub fn t_value(matrices: &[BitMatrix], m: usize, abort_at: Option<usize>) -> Option<usize> {
    let rows = leading_rows(matrices, m);
    let mut proven = 0usize;
    if let Some(bound) = abort_at {
        if bound == 0 {
            return None;
        }
        if bound <= m {
            let strength = m + 1 - bound;
            if !has_strength(&rows, strength) {
                return None;
            }
            proven = strength;
        }
    }
    for strength in proven + 1..=m {
        if !has_strength(&rows, strength) {
            return Some(m + 1 - strength);
        }
    }
    Some(0)
}

/// Largest t-value over the projections of order `1..=max_order`.
pub fn projection_t_value(
    matrices: &[BitMatrix],
    m: usize,
    max_order: usize,
    abort_at: Option<usize>,
) -> Option<usize> {
    let dimension = matrices.len();
    let mut worst = 0usize;
    for order in 1..=max_order.min(dimension) {
        for subset in combinations(dimension, order) {
            let projection: Vec<BitMatrix> =
                subset.iter().map(|&coord| matrices[coord].clone()).collect();
            let value = t_value(&projection, m, abort_at)?;
            worst = worst.max(value);
        }
    }
    Some(worst)
}

fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn expand(
        start: usize,
        n: usize,
        k: usize,
        current: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for next in start..n {
            current.push(next);
            expand(next + 1, n, k, current, out);
            current.pop();
        }
    }
    expand(0, n, k, &mut current, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_alone_has_zero_t_value() {
        assert_eq!(t_value(&[BitMatrix::identity(8)], 8, None), Some(0));
    }

    #[test]
    fn repeated_coordinate_has_maximal_defect() {
        let id = BitMatrix::identity(6);
        // two identical coordinates: only d = (k, 0) or (0, k) compositions are independent
        assert_eq!(t_value(&[id.clone(), id], 6, None), Some(5));
    }

    #[test]
    fn zero_matrix_has_t_equal_m() {
        assert_eq!(t_value(&[BitMatrix::zeros(4, 4)], 4, None), Some(4));
    }

    #[test]
    fn early_abort_reports_nothing_when_bound_is_reached() {
        let id = BitMatrix::identity(6);
        assert_eq!(t_value(&[id.clone(), id.clone()], 6, Some(5)), None);
        assert_eq!(t_value(&[id.clone(), id], 6, Some(6)), Some(5));
    }

    #[test]
    fn combinations_are_lexicographic() {
        assert_eq!(combinations(4, 2).len(), 6);
        assert_eq!(combinations(3, 2), vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }
}
