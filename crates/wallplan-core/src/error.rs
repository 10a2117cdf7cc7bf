//! Error taxonomy for plan computation.
//!
//! Everything here is recoverable and user-correctable: the engine refuses
//! to compute with incomplete hardware specs instead of producing misleading
//! zeros, and surfaces catalog misses by id. Degenerate capacities and stale
//! coordinates are handled silently inside the engine and never reach this
//! type.

use std::fmt;

/// Errors from plan computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The requested panel model is not in the catalog.
    UnknownPanel { id: String },
    /// The requested processor model is not in the catalog.
    UnknownProcessor { id: String },
    /// A panel model is missing spec fields required for computation.
    IncompleteSpecs {
        model: String,
        missing: Vec<&'static str>,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPanel { id } => write!(f, "unknown panel model {id:?}"),
            Self::UnknownProcessor { id } => write!(f, "unknown processor model {id:?}"),
            Self::IncompleteSpecs { model, missing } => {
                write!(
                    f,
                    "panel model {model:?} has unconfirmed specs (missing: {})",
                    missing.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for PlanError {}
