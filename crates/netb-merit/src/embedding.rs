//! Single-level and embedded (multilevel) evaluation as type-level markers.

use netb_core::EmbeddingType;
use netb_net::BitMatrix;

use crate::evaluator::MeritEvaluator;

/// Aggregation of the figures over the nets a candidate defines.
pub trait Embedding: Send + Sync + 'static {
    /// Runtime tag of the embedding.
    const TAG: EmbeddingType;

    /// Merit of the net given by `matrices` with `m` columns; `None` once it
    /// is known to reach `bound`.
    fn merit(
        evaluator: &MeritEvaluator,
        matrices: &[BitMatrix],
        m: usize,
        bound: Option<f64>,
    ) -> Option<f64>;
}

/// A single net of `2^m` points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unilevel;

/// The embedded nets of `2^1, ..., 2^m` points sharing one set of matrices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multilevel;

impl Embedding for Unilevel {
    const TAG: EmbeddingType = EmbeddingType::Unilevel;

    fn merit(
        evaluator: &MeritEvaluator,
        matrices: &[BitMatrix],
        m: usize,
        bound: Option<f64>,
    ) -> Option<f64> {
        evaluator
            .figure_combiner()
            .combine(evaluator.figures(), matrices, m, bound)
    }
}

impl Embedding for Multilevel {
    const TAG: EmbeddingType = EmbeddingType::Multilevel;

    fn merit(
        evaluator: &MeritEvaluator,
        matrices: &[BitMatrix],
        m: usize,
        bound: Option<f64>,
    ) -> Option<f64> {
        let figures = evaluator.figures();
        let combiner = evaluator.figure_combiner();
        evaluator
            .level_combiner()
            .combine(m, bound, |level, remaining| {
                combiner.combine(figures, matrices, level, remaining)
            })
    }
}
