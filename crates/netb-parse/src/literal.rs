use netb_core::{EmbeddingType, NetBuilderError};

use crate::error::grammar_error;

/// Parses a boolean literal (`true|false|1|0|yes|no|on|off`, any case).
pub fn parse_boolean(text: &str) -> Result<bool, NetBuilderError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(grammar_error("boolean", "expected a boolean literal", text)),
    }
}

/// Maps the `multilevel` literal to an embedding.
pub fn parse_embedding(text: &str) -> Result<EmbeddingType, NetBuilderError> {
    Ok(if parse_boolean(text)? {
        EmbeddingType::Multilevel
    } else {
        EmbeddingType::Unilevel
    })
}
