#![deny(missing_docs)]
#![doc = "Exploration of digital-net search spaces behind the `Task` interface."]

/// Exploration method descriptors.
pub mod exploration;
/// Generic search task.
pub mod search;
/// Construction- and embedding-independent task settings.
pub mod settings;
/// Task capability set.
pub mod task;

pub use exploration::ExplorationMethod;
pub use search::{parse_net, SearchTask, MAX_ENUMERATED_CANDIDATES};
pub use settings::SearchSettings;
pub use task::Task;
