#![forbid(unsafe_code)]

//! wallplan public facade and prelude.
//!
//! Plans physical LED video-wall installations: partitions a panel grid into
//! power circuits and data lines, sizes processors and distribution
//! hardware, and derives the physical cable runs connecting wall,
//! distribution boxes, processor, and server.
//!
//! The engine is a pure function of its configuration snapshot: hand
//! [`plan_wall`] (or [`plan_project`] for multi-wall jobs) a [`WallConfig`]
//! and a [`Catalog`], and read everything from the returned bundle.
//!
//! ```
//! use wallplan::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let config = WallConfig {
//!     name: "Upstage".to_string(),
//!     grid: PanelGrid::new(10, 6),
//!     ..WallConfig::default()
//! };
//! let plan = plan_wall(&catalog, &config).unwrap();
//! assert_eq!(plan.assignment.data_line_count(), 4);
//! assert!(plan.equipment.processor_count >= 1);
//! ```

pub use wallplan_cable::{
    cable_plan, round_up_to_standard, server_run, CableClass, CableManifest, CableMedia,
    CablePlanInput, CableRun, DropPosition, PanelFootprint, PowerEntry, WallGeometry,
};
pub use wallplan_core::{
    capacity, units, CapacityLimits, Catalog, ConnectionMode, OverrideMap, PanelCoord, PanelGrid,
    PanelMix, PanelSpec, PlanError, PortTopology, PowerProfile, ProcessorSpec, RedundancyRule,
    ResolvedPanel, MAX_PANELS_PER_LINE,
};
pub use wallplan_gear::{
    count_consumables, size_equipment, Consumables, EquipmentPlan, SizingInput,
};
pub use wallplan_layout::{
    assign_lines, AssignmentParams, AssignmentResult, LineAssignment, Traversal,
};
pub use wallplan_project::{
    plan_project, plan_wall, ProcessorGroup, ProjectPlan, SiteLayout, WallConfig, WallPlan,
    WallTotals,
};

/// Everything most callers need.
pub mod prelude {
    pub use crate::{
        plan_project, plan_wall, CableClass, CableManifest, Catalog, ConnectionMode, DropPosition,
        EquipmentPlan, OverrideMap, PanelCoord, PanelGrid, PlanError, PowerProfile, ProjectPlan,
        SiteLayout, Traversal, WallConfig, WallPlan,
    };
}
