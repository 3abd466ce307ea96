#![deny(missing_docs)]
#![doc = "Figures of merit for base-2 digital nets: t-value, resolution gap and projection t-value, with figure and level combiners and early-abort bounds."]

/// Figure and level combiners.
pub mod combiner;
/// Unilevel and multilevel embedding markers.
pub mod embedding;
/// Run-wide merit evaluator.
pub mod evaluator;
/// Individual figures of merit.
pub mod figure;
/// Resolution gap.
pub mod resolution;
/// t-value computations.
pub mod tvalue;

pub use combiner::{FigureCombiner, LevelCombiner};
pub use embedding::{Embedding, Multilevel, Unilevel};
pub use evaluator::MeritEvaluator;
pub use figure::{Figure, FigureKind, DEFAULT_PROJECTION_ORDER};
pub use resolution::{resolution, resolution_gap};
pub use tvalue::{projection_t_value, t_value};
