//! Merit evaluator shared by every search task.

use netb_core::{ErrorInfo, NetBuilderError};
use netb_net::BitMatrix;

use crate::combiner::{FigureCombiner, LevelCombiner};
use crate::embedding::Embedding;
use crate::figure::Figure;

/// Figures, combiners and the early-abort switch of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct MeritEvaluator {
    figures: Vec<Figure>,
    figure_combiner: FigureCombiner,
    level_combiner: LevelCombiner,
    early_abort: bool,
}

impl MeritEvaluator {
    /// Builds an evaluator; at least one figure is required.
    pub fn new(
        figures: Vec<Figure>,
        figure_combiner: FigureCombiner,
        level_combiner: LevelCombiner,
        early_abort: bool,
    ) -> Result<Self, NetBuilderError> {
        if figures.is_empty() {
            return Err(NetBuilderError::Configuration(
                ErrorInfo::new("no_figure", "at least one figure of merit is required")
                    .with_hint("pass --add-figure"),
            ));
        }
        Ok(Self {
            figures,
            figure_combiner,
            level_combiner,
            early_abort,
        })
    }

    /// Figures in evaluation order.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Combiner across figures.
    pub fn figure_combiner(&self) -> FigureCombiner {
        self.figure_combiner
    }

    /// Combiner across levels of embedded nets.
    pub fn level_combiner(&self) -> LevelCombiner {
        self.level_combiner
    }

    /// Whether candidates may be abandoned once they cannot beat the best.
    pub fn early_abort(&self) -> bool {
        self.early_abort
    }

    /// Checks that a `level:<l>` combiner names an existing level of nets with
    /// `m` columns.
    pub fn check_levels(&self, m: usize) -> Result<(), NetBuilderError> {
        match self.level_combiner {
            LevelCombiner::Level(level) if level == 0 || level > m => {
                Err(NetBuilderError::Configuration(
                    ErrorInfo::new("level_out_of_range", "combiner level outside 1..=m")
                        .with_context("level", level.to_string())
                        .with_context("m", m.to_string()),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Merit of a candidate; `None` when early abort is on and the candidate
    /// cannot beat `best`.
    pub fn evaluate<E: Embedding>(
        &self,
        matrices: &[BitMatrix],
        m: usize,
        best: Option<f64>,
    ) -> Option<f64> {
        let bound = if self.early_abort { best } else { None };
        E::merit(self, matrices, m, bound)
    }
}
