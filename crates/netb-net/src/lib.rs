#![deny(missing_docs)]
#![doc = "Base-2 digital nets: GF(2) linear algebra, the Sobol, polynomial and explicit constructions, and their text serialisers."]

/// Dense GF(2) matrices and incremental echelon bases.
pub mod bitmatrix;
/// Construction-family trait and markers.
pub mod construction;
/// Nets given by explicit generating matrices.
pub mod explicit;
/// Output serialisers (`cli`, `ssj`, `gui`).
pub mod format;
/// Polynomials over GF(2) and primitive polynomial tables.
pub mod gf2poly;
/// Generic digital net container.
pub mod net;
/// Polynomial lattice rules.
pub mod polynomial;
/// Sobol nets.
pub mod sobol;

pub use bitmatrix::{rank_of_rows, BitMatrix, EchelonBasis};
pub use construction::{ConstructionMethod, Explicit, Polynomial, Sobol};
pub use explicit::ExplicitDesign;
pub use gf2poly::{first_primitive_of_degree, primitive_polynomials, Gf2Poly};
pub use net::DigitalNet;
pub use polynomial::PolynomialDesign;
pub use sobol::SobolDesign;
