use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a net is a single point set or a family of nested point sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmbeddingType {
    /// A single net with a fixed number of points.
    Unilevel,
    /// Embedded nets: the first `2^k` points form a net for every level `k`.
    Multilevel,
}

impl EmbeddingType {
    /// Every embedding tag, in declaration order.
    pub const ALL: [EmbeddingType; 2] = [EmbeddingType::Unilevel, EmbeddingType::Multilevel];

    /// Stable lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbeddingType::Unilevel => "unilevel",
            EmbeddingType::Multilevel => "multilevel",
        }
    }
}

impl fmt::Display for EmbeddingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Family of generating-matrix constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NetConstruction {
    /// Sobol nets parameterised by initial direction numbers.
    Sobol,
    /// Polynomial lattice rules viewed as digital nets.
    Polynomial,
    /// Nets given directly by their generating matrices.
    Explicit,
}

impl NetConstruction {
    /// Every construction tag, in declaration order.
    pub const ALL: [NetConstruction; 3] = [
        NetConstruction::Sobol,
        NetConstruction::Polynomial,
        NetConstruction::Explicit,
    ];

    /// Keyword used by the construction grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetConstruction::Sobol => "sobol",
            NetConstruction::Polynomial => "polynomial",
            NetConstruction::Explicit => "explicit",
        }
    }
}

impl fmt::Display for NetConstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text representations a net can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Interactive display on the primary stream.
    Cli,
    /// Generating matrices as integer columns, readable by SSJ.
    Ssj,
    /// Generating matrices as bit rows, consumed by the notebook interface.
    Gui,
}

impl OutputFormat {
    /// Keyword used by the output-format grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Cli => "cli",
            OutputFormat::Ssj => "ssj",
            OutputFormat::Gui => "gui",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
