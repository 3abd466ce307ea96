use std::fmt;

use serde::{Deserialize, Serialize};

use netb_core::NetBuilderError;

use crate::error::grammar_error;

/// Whether a single net or an embedded sequence of nets is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    /// A single point set.
    #[default]
    Net,
    /// A sequence of embedded point sets.
    Sequence,
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SetType::Net => "net",
            SetType::Sequence => "sequence",
        })
    }
}

/// Parses `net` or `sequence`.
pub fn parse_set_type(text: &str) -> Result<SetType, NetBuilderError> {
    match text.trim() {
        "net" => Ok(SetType::Net),
        "sequence" => Ok(SetType::Sequence),
        _ => Err(grammar_error("set_type", "expected net or sequence", text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_types() {
        assert_eq!(parse_set_type("sequence").expect("seq"), SetType::Sequence);
        assert_eq!(parse_set_type("net").expect("net"), SetType::Net);
        assert!(parse_set_type("lattice").is_err());
    }
}
