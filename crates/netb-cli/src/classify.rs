use netb_core::{EmbeddingType, NetBuilderError};
use netb_parse::{
    parse_embedding, parse_multilevel_construction, parse_unilevel_construction,
    ConstructionChoice,
};

use crate::config::{OptionKey, RawConfiguration};

/// Default of `--multilevel`.
pub const DEFAULT_MULTILEVEL: &str = "false";
/// Default of `--construction`.
pub const DEFAULT_CONSTRUCTION: &str = "sobol";

/// Embedding selected by `--multilevel`.
pub fn classify_embedding(raw: &RawConfiguration) -> Result<EmbeddingType, NetBuilderError> {
    parse_embedding(raw.single(OptionKey::Multilevel).unwrap_or(DEFAULT_MULTILEVEL))
}

/// Construction family and design parameter, parsed with the grammar of
/// `embedding`.
pub fn classify_construction(
    raw: &RawConfiguration,
    embedding: EmbeddingType,
) -> Result<ConstructionChoice, NetBuilderError> {
    let text = raw
        .single(OptionKey::Construction)
        .unwrap_or(DEFAULT_CONSTRUCTION);
    match embedding {
        EmbeddingType::Unilevel => parse_unilevel_construction(text),
        EmbeddingType::Multilevel => parse_multilevel_construction(text),
    }
}
