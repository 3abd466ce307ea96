#![deny(missing_docs)]
#![doc = "String grammars of the netbuilder command line. Every failure is a `NetBuilderError::Grammar` carrying the offending text."]

/// Construction grammars.
pub mod construction;
mod error;
/// Exploration-method grammar.
pub mod exploration;
/// Figure, combiner and weights-power grammars.
pub mod figure;
/// Boolean and embedding literals.
pub mod literal;
/// Output-target grammar.
pub mod output;
/// Set-type grammar.
pub mod set_type;
/// Size and dimension grammars.
pub mod size;

pub use construction::{
    parse_construction, parse_multilevel_construction, parse_unilevel_construction,
    ConstructionChoice,
};
pub use exploration::parse_exploration_method;
pub use figure::{parse_figure, parse_figure_combiner, parse_level_combiner, parse_weights_power};
pub use literal::{parse_boolean, parse_embedding};
pub use output::{parse_format, parse_output_target, parse_output_targets, OutputTarget};
pub use set_type::{parse_set_type, SetType};
pub use size::{parse_dimension, parse_size, MAX_LOG_SIZE};
