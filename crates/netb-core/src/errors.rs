//! Structured error types shared across netbuilder crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`NetBuilderError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (option names, offending substrings, paths).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// The two failure classes that reach the top-level error boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed, missing or contradictory input; detected before any task runs.
    Configuration,
    /// I/O failures and failures raised while a task executes.
    Runtime,
}

/// Canonical error type for netbuilder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum NetBuilderError {
    /// A string did not match its grammar (construction, size, exploration, ...).
    #[error("{0}")]
    Grammar(ErrorInfo),
    /// A required option is missing, duplicated or contradicts another option.
    #[error("{0}")]
    Configuration(ErrorInfo),
    /// The requested construction/embedding pair has no task implementation.
    #[error("{0}")]
    UnsupportedCombination(ErrorInfo),
    /// Reading a configuration file or writing an output target failed.
    #[error("{0}")]
    Io(ErrorInfo),
    /// A task failed while executing its search.
    #[error("{0}")]
    Search(ErrorInfo),
}

impl NetBuilderError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            NetBuilderError::Grammar(info)
            | NetBuilderError::Configuration(info)
            | NetBuilderError::UnsupportedCombination(info)
            | NetBuilderError::Io(info)
            | NetBuilderError::Search(info) => info,
        }
    }

    /// Classifies the error into the configuration or runtime family.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NetBuilderError::Grammar(_)
            | NetBuilderError::Configuration(_)
            | NetBuilderError::UnsupportedCombination(_) => ErrorKind::Configuration,
            NetBuilderError::Io(_) | NetBuilderError::Search(_) => ErrorKind::Runtime,
        }
    }

    /// Prefix used when the error is reported on the diagnostic stream.
    pub fn banner(&self) -> &'static str {
        match self {
            NetBuilderError::Grammar(_) => "COMMAND LINE ERROR",
            _ => "ERROR",
        }
    }
}
