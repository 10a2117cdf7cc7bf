#![forbid(unsafe_code)]

//! Core: panel grid, hardware catalog, and capacity derivation.
//!
//! # Role in wallplan
//! `wallplan-core` is the input layer. It owns the addressable panel space
//! (grid dimensions plus deleted-panel set), the sparse manual override maps,
//! the panel/processor hardware catalog, and the conversion of hardware specs
//! into per-line and per-circuit capacity limits.
//!
//! # Primary responsibilities
//! - **PanelGrid / PanelCoord**: the addressable panel space with stale-entry
//!   pruning on resize.
//! - **OverrideMap**: sparse 1-based manual line/circuit assignments.
//! - **Catalog**: built-in and user-registered panel and processor specs.
//! - **Capacity**: pixel-capacity scaling by frame rate and bit depth, and
//!   breaker-driven panels-per-circuit limits.
//!
//! # How it fits in the system
//! The assignment engine (`wallplan-layout`) walks a `PanelGrid` under
//! capacity limits produced here. The cable and gear crates consume resolved
//! specs from the catalog. Everything downstream is a pure function of the
//! values defined in this crate.

pub mod capacity;
pub mod catalog;
pub mod error;
pub mod grid;
pub mod logging;
pub mod units;

pub use capacity::{CapacityLimits, PanelMix, PowerProfile, MAX_PANELS_PER_LINE};
pub use catalog::{
    Catalog, ConnectionMode, PanelSpec, PortTopology, ProcessorSpec, RedundancyRule, ResolvedPanel,
};
pub use error::PlanError;
pub use grid::{OverrideMap, PanelCoord, PanelGrid};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
