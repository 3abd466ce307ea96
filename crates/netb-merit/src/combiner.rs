//! Combination of several figures and of per-level values.

use std::fmt;

use serde::{Deserialize, Serialize};

use netb_net::BitMatrix;

use crate::figure::Figure;

/// How the weighted values of several figures are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureCombiner {
    /// Sum of the weighted values.
    Sum,
    /// Largest weighted value.
    #[default]
    Max,
}

impl fmt::Display for FigureCombiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FigureCombiner::Sum => "sum",
            FigureCombiner::Max => "max",
        })
    }
}

impl FigureCombiner {
    /// Combined value of `figures`; `None` once the result is known to reach
    /// `bound`.
    pub fn combine(
        self,
        figures: &[Figure],
        matrices: &[BitMatrix],
        m: usize,
        bound: Option<f64>,
    ) -> Option<f64> {
        let mut total = 0.0f64;
        for figure in figures {
            match self {
                FigureCombiner::Sum => {
                    let remaining = bound.map(|limit| limit - total);
                    total += figure.evaluate(matrices, m, remaining)?;
                }
                FigureCombiner::Max => {
                    total = total.max(figure.evaluate(matrices, m, bound)?);
                }
            }
        }
        Some(total)
    }
}

/// How per-level values of an embedded sequence of nets are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelCombiner {
    /// Sum over all levels.
    #[default]
    Sum,
    /// Largest value over all levels.
    Max,
    /// Value at one level (`1..=m`).
    Level(usize),
    /// Value at the highest level.
    LevelMax,
}

impl fmt::Display for LevelCombiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelCombiner::Sum => f.write_str("sum"),
            LevelCombiner::Max => f.write_str("max"),
            LevelCombiner::Level(level) => write!(f, "level:{level}"),
            LevelCombiner::LevelMax => f.write_str("level:max"),
        }
    }
}

impl LevelCombiner {
    /// Levels that contribute to the combined value for nets of `m` columns.
    pub fn levels(self, m: usize) -> std::ops::RangeInclusive<usize> {
        match self {
            LevelCombiner::Sum | LevelCombiner::Max => 1..=m,
            LevelCombiner::Level(level) => level..=level,
            LevelCombiner::LevelMax => m..=m,
        }
    }

    /// Combined value given an evaluator for a single level taking the
    /// remaining bound.
    pub fn combine<F>(self, m: usize, bound: Option<f64>, mut at_level: F) -> Option<f64>
    where
        F: FnMut(usize, Option<f64>) -> Option<f64>,
    {
        let mut total = 0.0f64;
        for level in self.levels(m) {
            match self {
                LevelCombiner::Sum => {
                    let remaining = bound.map(|limit| limit - total);
                    total += at_level(level, remaining)?;
                }
                _ => total = total.max(at_level(level, bound)?),
            }
        }
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::FigureKind;

    #[test]
    fn sum_and_max_differ_on_two_figures() {
        let id = BitMatrix::identity(4);
        let matrices = [id.clone(), id];
        let figures = [
            Figure::unweighted(FigureKind::TValue),
            Figure::unweighted(FigureKind::ResolutionGap),
        ];
        // t = 3, resolution gap = 2
        assert_eq!(FigureCombiner::Sum.combine(&figures, &matrices, 4, None), Some(5.0));
        assert_eq!(FigureCombiner::Max.combine(&figures, &matrices, 4, None), Some(3.0));
        assert_eq!(FigureCombiner::Sum.combine(&figures, &matrices, 4, Some(5.0)), None);
    }

    #[test]
    fn level_ranges() {
        assert_eq!(LevelCombiner::Sum.levels(4), 1..=4);
        assert_eq!(LevelCombiner::Level(2).levels(4), 2..=2);
        assert_eq!(LevelCombiner::LevelMax.levels(4), 4..=4);
    }

    #[test]
    fn level_sum_aborts_on_partial_total() {
        let calls = std::cell::Cell::new(0);
        let value = LevelCombiner::Sum.combine(3, Some(2.0), |_, remaining| {
            calls.set(calls.get() + 1);
            match remaining {
                Some(limit) if 1.0 >= limit => None,
                _ => Some(1.0),
            }
        });
        assert_eq!(value, None);
        assert_eq!(calls.get(), 2);
    }
}
