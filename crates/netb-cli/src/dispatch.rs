//! Lookup table from `(construction, embedding)` to a statically specialised
//! task factory.

use std::collections::BTreeMap;

use netb_core::{EmbeddingType, ErrorInfo, NetBuilderError, NetConstruction};
use netb_merit::{Embedding, Multilevel, Unilevel};
use netb_net::{ConstructionMethod, Explicit, Polynomial, Sobol};
use netb_search::{SearchSettings, SearchTask, Task};

/// Builds a boxed task from search settings.
pub type TaskFactory = fn(SearchSettings) -> Result<Box<dyn Task>, NetBuilderError>;

fn factory<C: ConstructionMethod, E: Embedding>(
    settings: SearchSettings,
) -> Result<Box<dyn Task>, NetBuilderError> {
    Ok(Box::new(SearchTask::<C, E>::new(settings)?))
}

/// Supported construction and embedding pairs with their factories.
#[derive(Debug, Clone)]
pub struct DispatchMatrix {
    table: BTreeMap<(NetConstruction, EmbeddingType), TaskFactory>,
}

impl Default for DispatchMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchMatrix {
    /// Table of every implemented pair.
    pub fn new() -> Self {
        let mut table: BTreeMap<(NetConstruction, EmbeddingType), TaskFactory> = BTreeMap::new();
        table.insert(key::<Sobol, Unilevel>(), factory::<Sobol, Unilevel>);
        table.insert(key::<Sobol, Multilevel>(), factory::<Sobol, Multilevel>);
        table.insert(key::<Polynomial, Unilevel>(), factory::<Polynomial, Unilevel>);
        table.insert(key::<Explicit, Unilevel>(), factory::<Explicit, Unilevel>);
        Self { table }
    }

    /// Factory for the pair, `None` when no implementation exists.
    pub fn lookup(
        &self,
        construction: NetConstruction,
        embedding: EmbeddingType,
    ) -> Option<TaskFactory> {
        self.table.get(&(construction, embedding)).copied()
    }

    /// Factory for the pair, or an `UnsupportedCombination` error.
    pub fn resolve(
        &self,
        construction: NetConstruction,
        embedding: EmbeddingType,
    ) -> Result<TaskFactory, NetBuilderError> {
        self.lookup(construction, embedding).ok_or_else(|| {
            NetBuilderError::UnsupportedCombination(
                ErrorInfo::new(
                    "unsupported_combination",
                    format!("no {embedding} implementation of the {construction} construction"),
                )
                .with_context("construction", construction.as_str())
                .with_context("embedding", embedding.as_str()),
            )
        })
    }

    /// Builds the task for the pair or reports the missing combination.
    pub fn build(
        &self,
        construction: NetConstruction,
        embedding: EmbeddingType,
        settings: SearchSettings,
    ) -> Result<Box<dyn Task>, NetBuilderError> {
        let factory = self.resolve(construction, embedding)?;
        factory(settings)
    }

    /// Every supported pair, in table order.
    pub fn supported_pairs(&self) -> Vec<(NetConstruction, EmbeddingType)> {
        self.table.keys().copied().collect()
    }
}

fn key<C: ConstructionMethod, E: Embedding>() -> (NetConstruction, EmbeddingType) {
    (C::TAG, E::TAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_four_pairs_are_supported() {
        let matrix = DispatchMatrix::new();
        assert_eq!(matrix.supported_pairs().len(), 4);
        assert!(matrix
            .lookup(NetConstruction::Polynomial, EmbeddingType::Multilevel)
            .is_none());
        assert!(matrix
            .lookup(NetConstruction::Explicit, EmbeddingType::Multilevel)
            .is_none());
        assert!(matrix
            .lookup(NetConstruction::Sobol, EmbeddingType::Multilevel)
            .is_some());
    }
}
