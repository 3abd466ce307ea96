//! Individual figures of merit.

use std::fmt;

use serde::{Deserialize, Serialize};

use netb_net::BitMatrix;

use crate::resolution::resolution_gap;
use crate::tvalue::{projection_t_value, t_value};

/// Default maximal projection order of `projdep:t-value`.
pub const DEFAULT_PROJECTION_ORDER: usize = 2;

/// Kind of figure of merit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    /// t-value of the full net.
    TValue,
    /// Gap between `floor(m/s)` and the resolution.
    ResolutionGap,
    /// Largest t-value over projections of bounded order.
    ProjectionTValue {
        /// Highest projection order considered.
        max_order: usize,
    },
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureKind::TValue => f.write_str("t-value"),
            FigureKind::ResolutionGap => f.write_str("resolution-gap"),
            FigureKind::ProjectionTValue { max_order } => write!(f, "projdep:t-value:{max_order}"),
        }
    }
}

/// A figure of merit with its importance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    kind: FigureKind,
    importance: f64,
}

impl Figure {
    /// Figure with the given importance.
    pub fn new(kind: FigureKind, importance: f64) -> Self {
        Self { kind, importance }
    }

    /// Figure of unit importance.
    pub fn unweighted(kind: FigureKind) -> Self {
        Self::new(kind, 1.0)
    }

    /// Kind of the figure.
    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    /// Importance applied to the raw value.
    pub fn importance(&self) -> f64 {
        self.importance
    }

    /// Undoes a weights power `p`: importances are supplied already raised to
    /// `p`, so the effective importance is `importance^(1/p)`. An infinite
    /// power leaves the importance unchanged.
    pub fn with_weights_power(self, power: f64) -> Self {
        if power.is_infinite() {
            return self;
        }
        Self {
            importance: self.importance.powf(1.0 / power),
            ..self
        }
    }

    /// Weighted value on the first `m` columns; `None` once the weighted value
    /// is known to reach `bound`.
    pub fn evaluate(&self, matrices: &[BitMatrix], m: usize, bound: Option<f64>) -> Option<f64> {
        let raw_bound = match bound {
            Some(limit) if self.importance > 0.0 => {
                Some(integer_threshold(limit / self.importance)?)
            }
            Some(limit) if limit <= 0.0 => return None,
            _ => None,
        };
        let raw = match self.kind {
            FigureKind::TValue => t_value(matrices, m, raw_bound)?,
            FigureKind::ResolutionGap => resolution_gap(matrices, m, raw_bound)?,
            FigureKind::ProjectionTValue { max_order } => {
                projection_t_value(matrices, m, max_order, raw_bound)?
            }
        };
        Some(self.importance * raw as f64)
    }
}

/// Smallest integer `v` with `v >= limit`; `None` when every value reaches it.
fn integer_threshold(limit: f64) -> Option<usize> {
    if limit <= 0.0 {
        return None;
    }
    if limit >= usize::MAX as f64 {
        return Some(usize::MAX);
    }
    Some(limit.ceil() as usize)
}
