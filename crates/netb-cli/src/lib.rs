#![deny(missing_docs)]
#![doc = "netbuilder driver: configuration validation, construction and embedding classification, task dispatch and the repeated-execution harness."]

/// End-to-end driver.
pub mod app;
/// Embedding and construction classifiers.
pub mod classify;
/// Raw configuration, command line and validation rules.
pub mod config;
/// Task descriptor and report options.
pub mod descriptor;
/// Dispatch matrix.
pub mod dispatch;
/// Result emitter.
pub mod emit;
/// Execution harness.
pub mod harness;

pub use app::{init_tracing, run, run_configuration};
pub use classify::{classify_construction, classify_embedding};
pub use config::{parse_invocation, validate, CliArgs, Invocation, OptionKey, RawConfiguration};
pub use descriptor::{ReportOptions, TaskDescriptor};
pub use dispatch::{DispatchMatrix, TaskFactory};
pub use emit::emit;
pub use harness::{Harness, HarnessState};
