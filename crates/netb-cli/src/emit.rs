use std::fs;
use std::io::Write;

use netb_core::{ErrorInfo, NetBuilderError, OutputFormat, Precision};
use netb_parse::OutputTarget;
use netb_search::Task;

pub(crate) fn stream_error(err: std::io::Error) -> NetBuilderError {
    NetBuilderError::Io(ErrorInfo::new("stdout_write", err.to_string()))
}

/// Prints the net and its merit, then writes every output target in order.
///
/// `precision` applies to this merit line only. A failing target aborts the
/// remaining ones; files already written are kept.
pub fn emit<W: Write>(
    out: &mut W,
    task: &dyn Task,
    precision: Precision,
    targets: &[OutputTarget],
) -> Result<(), NetBuilderError> {
    let net = task.output_net(OutputFormat::Cli)?;
    let merit = task.output_merit_value(precision)?;
    writeln!(out, "{net}merit: {merit}").map_err(stream_error)?;
    for target in targets {
        let body = task.output_net(target.format)?;
        fs::write(&target.path, body).map_err(|err| {
            NetBuilderError::Io(
                ErrorInfo::new("output_write", err.to_string())
                    .with_context("path", target.path.display().to_string())
                    .with_context("format", target.format.as_str()),
            )
        })?;
        tracing::debug!(
            path = %target.path.display(),
            format = %target.format,
            "wrote output target"
        );
    }
    Ok(())
}
