use std::fmt;

use serde::{Deserialize, Serialize};

/// Strategy used to walk the space of candidate nets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
pub enum ExplorationMethod {
    /// Evaluate one net given by its `/`-separated coordinate description.
    Evaluation {
        /// Coordinate descriptions in construction-specific syntax.
        net: String,
    },
    /// Every combination of generating values.
    Exhaustive,
    /// Independently drawn nets.
    Random {
        /// Number of nets drawn.
        samples: usize,
    },
    /// Component-by-component search trying every value per coordinate.
    FullCbc,
    /// Component-by-component search with random values per coordinate.
    RandomCbc {
        /// Values drawn per coordinate.
        samples: usize,
    },
    /// Full CBC on the first coordinates, random CBC afterwards.
    MixedCbc {
        /// Values drawn per randomly explored coordinate.
        samples: usize,
        /// Number of leading coordinates explored exhaustively.
        full_coordinates: usize,
    },
}

impl ExplorationMethod {
    /// Short method name as written on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ExplorationMethod::Evaluation { .. } => "evaluation",
            ExplorationMethod::Exhaustive => "exhaustive",
            ExplorationMethod::Random { .. } => "random",
            ExplorationMethod::FullCbc => "full-CBC",
            ExplorationMethod::RandomCbc { .. } => "random-CBC",
            ExplorationMethod::MixedCbc { .. } => "mixed-CBC",
        }
    }
}

impl fmt::Display for ExplorationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorationMethod::Evaluation { net } => write!(f, "evaluation:{net}"),
            ExplorationMethod::Random { samples } => write!(f, "random:{samples}"),
            ExplorationMethod::RandomCbc { samples } => write!(f, "random-CBC:{samples}"),
            ExplorationMethod::MixedCbc {
                samples,
                full_coordinates,
            } => write!(f, "mixed-CBC:{samples}:{full_coordinates}"),
            other => f.write_str(other.name()),
        }
    }
}
