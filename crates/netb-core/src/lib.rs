#![deny(missing_docs)]
#![doc = "Core error types, classification tags and seeding helpers shared by the netbuilder crates."]

pub mod errors;
pub mod precision;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, ErrorKind, NetBuilderError};
pub use precision::{format_significant, Precision};
pub use rng::{derive_substream_seed, entropy_seed, RngHandle};
pub use types::{EmbeddingType, NetConstruction, OutputFormat};
