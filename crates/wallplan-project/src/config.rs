//! The immutable per-wall configuration snapshot.

use serde::{Deserialize, Serialize};
use wallplan_cable::{DropPosition, PowerEntry};
use wallplan_core::{ConnectionMode, OverrideMap, PanelGrid, PowerProfile};
use wallplan_layout::Traversal;

/// Equipment placement around one wall. Wall dimensions are derived from
/// the grid and panel model, so they do not appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteLayout {
    /// Wall bottom edge to floor.
    pub wall_to_floor_ft: f64,
    /// Drop vertical to power distro.
    pub distro_to_wall_ft: f64,
    /// Drop vertical to processor position.
    pub processor_to_wall_ft: f64,
    /// Media server to processor.
    pub server_to_processor_ft: f64,
    /// Intermediate pick height; 0 for none.
    pub cable_pick_ft: f64,
    /// Where cables leave the wall.
    pub drop_position: DropPosition,
    /// Which edge power feeds enter.
    pub power_entry: PowerEntry,
    /// Whether the data distribution box hangs on the wall.
    pub dist_box_on_wall: bool,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            wall_to_floor_ft: 5.0,
            distro_to_wall_ft: 10.0,
            processor_to_wall_ft: 15.0,
            server_to_processor_ft: 50.0,
            cable_pick_ft: 0.0,
            drop_position: DropPosition::default(),
            power_entry: PowerEntry::default(),
            dist_box_on_wall: false,
        }
    }
}

/// Everything the engine needs to plan one wall.
///
/// The engine never mutates a config; every plan call recomputes all derived
/// state from the snapshot it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallConfig {
    /// Display name, carried through for consumers.
    pub name: String,
    /// Panel model catalog id.
    pub panel: String,
    /// Processor model catalog id.
    pub processor: String,
    /// The panel grid with deletions.
    pub grid: PanelGrid,
    /// Finish the wall with a trailing half-height row (only honored when
    /// the panel model has a half-row companion).
    pub half_row: bool,
    /// Data-line traversal order.
    pub data_traversal: Traversal,
    /// Circuit traversal order.
    pub power_traversal: Traversal,
    /// Manual data-line assignments.
    pub data_overrides: OverrideMap,
    /// Manual circuit assignments.
    pub circuit_overrides: OverrideMap,
    /// Supply voltage.
    pub voltage: f64,
    /// Breaker rating in amps.
    pub breaker_amps: f64,
    /// Which power figure drives circuit capacity.
    pub power_profile: PowerProfile,
    /// Content frame rate in Hz.
    pub frame_rate: u32,
    /// Content bit depth.
    pub bit_depth: u32,
    /// User cap on panels per data line; overrides the computed capacity.
    pub max_panels_per_data: Option<u32>,
    /// User cap on panels per circuit; overrides the computed capacity.
    pub max_panels_per_circuit: Option<u32>,
    /// Whether backup data distribution is required.
    pub redundancy: bool,
    /// Whether the processor count is doubled for failover.
    pub processor_redundancy: bool,
    /// Mode selection for switchable-topology processors.
    pub connection_mode: ConnectionMode,
    /// Equipment placement.
    pub site: SiteLayout,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            panel: "BP2_V2".to_string(),
            processor: "Brompton_SX40".to_string(),
            grid: PanelGrid::default(),
            half_row: false,
            data_traversal: Traversal::SerpentineTop,
            power_traversal: Traversal::ColumnMajor,
            data_overrides: OverrideMap::new(),
            circuit_overrides: OverrideMap::new(),
            voltage: 208.0,
            breaker_amps: 20.0,
            power_profile: PowerProfile::Max,
            frame_rate: 60,
            bit_depth: 8,
            max_panels_per_data: None,
            max_panels_per_circuit: None,
            redundancy: true,
            processor_redundancy: false,
            connection_mode: ConnectionMode::Direct,
            site: SiteLayout::default(),
        }
    }
}
