//! `<family>[:<design-parameter>]` grammars, one per embedding.

use serde::{Deserialize, Serialize};

use netb_core::{EmbeddingType, NetBuilderError, NetConstruction};

use crate::error::grammar_error;

/// Construction family with its unconsumed design parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionChoice {
    /// Selected family.
    pub construction: NetConstruction,
    /// Text after the first `:`, empty when absent.
    pub design_parameter: String,
}

/// Families a grammar accepts.
fn accepted(embedding: EmbeddingType) -> &'static [NetConstruction] {
    match embedding {
        EmbeddingType::Unilevel => &NetConstruction::ALL,
        EmbeddingType::Multilevel => &[NetConstruction::Sobol, NetConstruction::Polynomial],
    }
}

/// Parses a construction string under the grammar of `embedding`.
pub fn parse_construction(
    text: &str,
    embedding: EmbeddingType,
) -> Result<ConstructionChoice, NetBuilderError> {
    let trimmed = text.trim();
    let (family, design) = trimmed.split_once(':').unwrap_or((trimmed, ""));
    let construction = accepted(embedding)
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == family)
        .ok_or_else(|| {
            grammar_error(
                "construction",
                format!("`{family}` is not a {embedding} construction"),
                text,
            )
        })?;
    if construction == NetConstruction::Sobol && !design.is_empty() {
        return Err(grammar_error(
            "construction",
            "the sobol construction takes no design parameter",
            text,
        ));
    }
    Ok(ConstructionChoice {
        construction,
        design_parameter: design.to_string(),
    })
}

/// Unilevel grammar: `sobol`, `polynomial[:<modulus>]`, `explicit[:<size>]`.
pub fn parse_unilevel_construction(text: &str) -> Result<ConstructionChoice, NetBuilderError> {
    parse_construction(text, EmbeddingType::Unilevel)
}

/// Multilevel grammar: `sobol`, `polynomial[:<modulus>]`.
pub fn parse_multilevel_construction(text: &str) -> Result<ConstructionChoice, NetBuilderError> {
    parse_construction(text, EmbeddingType::Multilevel)
}
