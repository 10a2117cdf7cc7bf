#![forbid(unsafe_code)]

//! Per-wall orchestration and multi-wall aggregation.
//!
//! # Role in wallplan
//! `wallplan-project` ties the layers together. [`plan_wall`] takes one
//! immutable [`WallConfig`] snapshot and returns a complete [`WallPlan`]
//! bundle — capacity limits, line assignment, equipment, cable manifest, and
//! totals — recomputed from scratch on every call. Consumers read from the
//! bundle; nothing depends on call order or shared mutable state.
//!
//! [`plan_project`] folds several walls: walls sharing a processor model
//! also share its boxes and processors, so lines and pixels are summed per
//! group and the sizer runs once on the sums. System-wide server cabling is
//! sized once against the longest run any wall needs.

pub mod aggregate;
pub mod config;
pub mod wall;

pub use aggregate::{plan_project, ProcessorGroup, ProjectPlan};
pub use config::{SiteLayout, WallConfig};
pub use wall::{plan_wall, WallPlan, WallTotals};
