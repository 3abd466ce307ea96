use netb_core::OutputFormat;

use crate::bitmatrix::BitMatrix;
use crate::construction::ConstructionMethod;
use crate::format::{render_gui, render_ssj};

/// Digital net in base 2 built coordinate by coordinate.
///
/// Keeps both the family-specific generating values (for display) and the
/// generating matrices they induce (for evaluation and export).
#[derive(Debug)]
pub struct DigitalNet<C: ConstructionMethod> {
    design: C::DesignParameter,
    genvalues: Vec<C::GenValue>,
    matrices: Vec<BitMatrix>,
}

// `C` is a marker; only its associated types are cloned.
impl<C: ConstructionMethod> Clone for DigitalNet<C> {
    fn clone(&self) -> Self {
        Self {
            design: self.design.clone(),
            genvalues: self.genvalues.clone(),
            matrices: self.matrices.clone(),
        }
    }
}

impl<C: ConstructionMethod> DigitalNet<C> {
    /// Net with no coordinates yet.
    pub fn empty(design: C::DesignParameter) -> Self {
        Self {
            design,
            genvalues: Vec::new(),
            matrices: Vec::new(),
        }
    }

    /// Builds a net from one generating value per coordinate.
    pub fn from_genvalues(design: C::DesignParameter, genvalues: Vec<C::GenValue>) -> Self {
        let mut net = Self::empty(design);
        for genvalue in genvalues {
            net.push(genvalue);
        }
        net
    }

    /// Appends the next coordinate.
    pub fn push(&mut self, genvalue: C::GenValue) {
        let coord = self.genvalues.len();
        self.matrices
            .push(C::create_matrix(&self.design, coord, &genvalue));
        self.genvalues.push(genvalue);
    }

    /// Copy of this net extended by one coordinate.
    pub fn extended(&self, genvalue: C::GenValue) -> Self {
        let mut next = self.clone();
        next.push(genvalue);
        next
    }

    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.genvalues.len()
    }

    /// `log2` of the number of points.
    pub fn columns(&self) -> usize {
        C::columns(&self.design)
    }

    /// Design parameter shared by all coordinates.
    pub fn design(&self) -> &C::DesignParameter {
        &self.design
    }

    /// Generating values, one per coordinate.
    pub fn genvalues(&self) -> &[C::GenValue] {
        &self.genvalues
    }

    /// Generating matrices, one per coordinate.
    pub fn matrices(&self) -> &[BitMatrix] {
        &self.matrices
    }

    /// Text representation in the requested format.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Cli => format!(
                "{} Digital Net - Dimension: {}\n{}",
                C::NAME,
                self.dimension(),
                C::format_genvalues(&self.design, &self.genvalues)
            ),
            OutputFormat::Ssj => render_ssj(&self.matrices),
            OutputFormat::Gui => render_gui(&self.matrices),
        }
    }
}
