use netb_core::{ErrorInfo, NetBuilderError};

/// Grammar failure carrying the offending text.
pub(crate) fn grammar_error(code: &str, message: impl Into<String>, text: &str) -> NetBuilderError {
    NetBuilderError::Grammar(ErrorInfo::new(code, message).with_context("input", text))
}
