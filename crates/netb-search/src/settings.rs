use netb_merit::MeritEvaluator;

use crate::exploration::ExplorationMethod;

/// Everything a search task needs, independent of construction and embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    /// Column count `m` (nets of `2^m` points).
    pub m: usize,
    /// Number of coordinates.
    pub dimension: usize,
    /// Unconsumed remainder of the construction option.
    pub design_parameter: String,
    /// How candidates are explored.
    pub exploration: ExplorationMethod,
    /// How candidates are scored.
    pub evaluator: MeritEvaluator,
    /// Seed of the random explorations.
    pub seed: u64,
}
