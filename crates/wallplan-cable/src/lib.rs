#![forbid(unsafe_code)]

//! Cable geometry: wall and equipment layout to physical cable runs.
//!
//! # Role in wallplan
//! Converts a wall's dimensions, drop point, optional pick, and equipment
//! standoffs into per-class cable run lengths, then rounds each run up onto
//! the procurement ladder of standard lengths. Runs are derived from the
//! line assignment: one power run per SOCA group, one data run per line
//! (doubled for redundancy), trunk runs for on-wall distribution boxes, and
//! bridge runs where knockouts break a line's physical chain.
//!
//! Rounding always rounds up, never down: a short cable cannot substitute
//! for a required run.

pub mod geometry;
pub mod manifest;
pub mod plan;
pub mod routing;

pub use geometry::{DropPosition, PanelFootprint, PowerEntry, WallGeometry};
pub use manifest::{
    round_up_to_standard, server_run, CableClass, CableManifest, CableMedia, CableRun,
    FIBER_TRUNK_THRESHOLD_FT, SDI_SERVER_LIMIT_FT, STANDARD_LENGTHS_FT,
};
pub use plan::{cable_plan, CablePlanInput};
pub use routing::detour_hops;
