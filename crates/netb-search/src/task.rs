use netb_core::{NetBuilderError, OutputFormat, Precision};

/// Unit of work driven by the execution harness.
pub trait Task {
    /// Short description used in logs.
    fn label(&self) -> String;

    /// Runs the exploration and keeps the best net found.
    fn execute(&mut self) -> Result<(), NetBuilderError>;

    /// Best net in the requested format.
    fn output_net(&self, format: OutputFormat) -> Result<String, NetBuilderError>;

    /// Merit of the best net, formatted with `precision`.
    fn output_merit_value(&self, precision: Precision) -> Result<String, NetBuilderError>;
}
