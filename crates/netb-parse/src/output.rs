use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use netb_core::{NetBuilderError, OutputFormat};

use crate::error::grammar_error;

/// One output target: a file and the format written to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTarget {
    /// Destination file, truncated on write.
    pub path: PathBuf,
    /// Serialisation written to the file.
    pub format: OutputFormat,
}

/// Parses an output format name.
pub fn parse_format(text: &str) -> Result<OutputFormat, NetBuilderError> {
    match text.trim() {
        "cli" => Ok(OutputFormat::Cli),
        "ssj" => Ok(OutputFormat::Ssj),
        "gui" => Ok(OutputFormat::Gui),
        _ => Err(grammar_error("output_format", "expected cli, ssj or gui", text)),
    }
}

/// Parses `file:"<path>":<format>` or `file:<path>:<format>`.
pub fn parse_output_target(text: &str) -> Result<OutputTarget, NetBuilderError> {
    let body = text
        .trim()
        .strip_prefix("file:")
        .ok_or_else(|| grammar_error("output_target", "expected file:<path>:<format>", text))?;
    let (path, format) = if let Some(quoted) = body.strip_prefix('"') {
        let (path, rest) = quoted
            .split_once('"')
            .ok_or_else(|| grammar_error("output_target", "unterminated quoted path", text))?;
        let format = rest
            .strip_prefix(':')
            .ok_or_else(|| grammar_error("output_target", "missing format after path", text))?;
        (path, format)
    } else {
        body.rsplit_once(':')
            .ok_or_else(|| grammar_error("output_target", "missing format after path", text))?
    };
    if path.is_empty() {
        return Err(grammar_error("output_target", "empty output path", text));
    }
    Ok(OutputTarget {
        path: PathBuf::from(path),
        format: parse_format(format)?,
    })
}

/// Parses every output target, keeping the configured order.
pub fn parse_output_targets<S: AsRef<str>>(
    texts: &[S],
) -> Result<Vec<OutputTarget>, NetBuilderError> {
    texts
        .iter()
        .map(|text| parse_output_target(text.as_ref()))
        .collect()
}
