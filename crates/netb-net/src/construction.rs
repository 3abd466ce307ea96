//! Construction families as type-level markers.
//!
//! Each family is a zero-sized type implementing [`ConstructionMethod`]; search
//! tasks are generic over it so that the family is fixed at compile time once
//! the dispatch matrix has picked an implementation.

use std::fmt;

use netb_core::{NetBuilderError, NetConstruction, RngHandle};

use crate::bitmatrix::BitMatrix;

/// Behaviour shared by every net-construction family.
pub trait ConstructionMethod: Sized + Send + Sync + 'static {
    /// Runtime tag of the family.
    const TAG: NetConstruction;
    /// Human readable family name used in headers.
    const NAME: &'static str;

    /// Family-wide parameters (modulus, matrix shape, ...) parsed from the
    /// design-parameter string. Always carries the column count `m`.
    type DesignParameter: Clone + fmt::Debug + Send + Sync;
    /// Per-coordinate generating value.
    type GenValue: Clone + fmt::Debug + PartialEq + Send + Sync;

    /// Parses the residual design parameter for a net of `2^m` points in
    /// `dimension` coordinates.
    fn parse_design_parameter(
        text: &str,
        m: usize,
        dimension: usize,
    ) -> Result<Self::DesignParameter, NetBuilderError>;

    /// Number of columns of every generating matrix (`log2` of the size).
    fn columns(design: &Self::DesignParameter) -> usize;

    /// Number of candidate generating values for `coord`, or `None` when the
    /// space does not fit in a `u64`.
    fn space_size(design: &Self::DesignParameter, coord: usize) -> Option<u64>;

    /// Candidate number `index` (in `0..space_size`) for `coord`.
    fn genvalue_at(design: &Self::DesignParameter, coord: usize, index: u64) -> Self::GenValue;

    /// Uniformly drawn candidate for `coord`.
    fn random_genvalue(
        design: &Self::DesignParameter,
        coord: usize,
        rng: &mut RngHandle,
    ) -> Self::GenValue;

    /// Parses one coordinate of an explicit net description.
    fn parse_genvalue(
        design: &Self::DesignParameter,
        coord: usize,
        text: &str,
    ) -> Result<Self::GenValue, NetBuilderError>;

    /// Generating matrix of `coord` for the given value.
    fn create_matrix(
        design: &Self::DesignParameter,
        coord: usize,
        genvalue: &Self::GenValue,
    ) -> BitMatrix;

    /// Family-specific body of the interactive representation.
    fn format_genvalues(design: &Self::DesignParameter, genvalues: &[Self::GenValue]) -> String;
}

/// Marker for Sobol nets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sobol;

/// Marker for polynomial lattice rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Polynomial;

/// Marker for nets given by explicit generating matrices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Explicit;

pub(crate) fn design_error(code: &str, message: impl Into<String>, text: &str) -> NetBuilderError {
    NetBuilderError::Grammar(
        netb_core::ErrorInfo::new(code, message).with_context("design_parameter", text),
    )
}

pub(crate) fn genvalue_error(
    code: &str,
    message: impl Into<String>,
    coord: usize,
    text: &str,
) -> NetBuilderError {
    NetBuilderError::Grammar(
        netb_core::ErrorInfo::new(code, message)
            .with_context("coordinate", coord.to_string())
            .with_context("value", text),
    )
}
