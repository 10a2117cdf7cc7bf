//! One wall, planned in full.

use serde::{Deserialize, Serialize};
use wallplan_cable::{cable_plan, CableManifest, CablePlanInput, PanelFootprint, WallGeometry};
use wallplan_core::capacity::{panels_per_circuit, panels_per_data_line, PanelMix};
use wallplan_core::{debug, CapacityLimits, Catalog, PlanError, PowerProfile, ResolvedPanel};
use wallplan_layout::{assign_lines, AssignmentParams, AssignmentResult};
use wallplan_gear::{count_consumables, size_equipment, Consumables, EquipmentPlan, SizingInput};

use crate::config::WallConfig;

/// Headline figures for one wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallTotals {
    /// Live full-size panels (after deletions).
    pub full_panels: u32,
    /// Half-row panels (0 without a trailing half row).
    pub half_panels: u32,
    /// All live panels.
    pub total_panels: u32,
    /// Live pixels driven.
    pub total_pixels: u64,
    /// Wall resolution, horizontal.
    pub res_x: u32,
    /// Wall resolution, vertical (including any half row).
    pub res_y: u32,
    /// Wall width in feet.
    pub wall_width_ft: f64,
    /// Wall height in feet (including any half row).
    pub wall_height_ft: f64,
    /// Total wall draw in watts at the configured power profile.
    pub total_power_w: f64,
}

/// The complete result bundle for one wall.
///
/// Everything a consumer (diagram renderer, spec summary, gear list,
/// exporter) reads comes from this value; no consumer depends on engine
/// side effects or call order.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPlan {
    /// Display name from the config.
    pub name: String,
    /// Panel model id.
    pub panel: String,
    /// Processor model id.
    pub processor: String,
    /// Resolved capacity limits after overrides.
    pub capacity: CapacityLimits,
    /// Per-panel circuit and data-line assignment.
    pub assignment: AssignmentResult,
    /// Sized equipment.
    pub equipment: EquipmentPlan,
    /// Physical cable runs.
    pub cables: CableManifest,
    /// Jumper and coupler counts.
    pub consumables: Consumables,
    /// Headline figures.
    pub totals: WallTotals,
}

/// Plan one wall from its configuration snapshot.
///
/// Stale deleted-panel and override coordinates are pruned on a working
/// copy before anything runs; the caller's config is never mutated. An
/// empty grid produces a plan of well-defined zeros.
pub fn plan_wall(catalog: &Catalog, config: &WallConfig) -> Result<WallPlan, PlanError> {
    let panel = catalog.resolved_panel(&config.panel)?;
    let processor = catalog.processor(&config.processor)?;

    let half_panel = half_row_panel(catalog, config, &panel)?;

    // Work on pruned copies; stale coordinates from prior resizes must
    // never affect counts.
    let mut grid = config.grid.clone();
    grid.prune();

    // Data lines run over the effective grid, which gains a row when the
    // wall is finished with a half-height row. Half-row panels are always
    // live.
    let effective_grid = match &half_panel {
        Some(_) => grid.with_height(grid.height() + 1),
        None => grid.clone(),
    };
    let mut data_overrides = config.data_overrides.clone();
    data_overrides.prune(&effective_grid);
    let mut circuit_overrides = config.circuit_overrides.clone();
    circuit_overrides.prune(&effective_grid);

    let full_panels = grid.live_count();
    let half_panels = half_panel.as_ref().map_or(0, |_| u32::from(grid.width()));
    let mix = PanelMix {
        full_count: full_panels,
        full_pixels: panel.pixels,
        half_count: half_panels,
        half_pixels: half_panel.as_ref().map_or(0, |p| p.pixels),
    };

    let capacity = CapacityLimits {
        panels_per_data_line: panels_per_data_line(
            processor,
            config.frame_rate,
            config.bit_depth,
            &mix,
            config.max_panels_per_data,
        ),
        panels_per_circuit: panels_per_circuit(
            config.voltage,
            config.breaker_amps,
            per_panel_watts(&panel, config.power_profile),
            config.max_panels_per_circuit,
        ),
    };

    let assignment = AssignmentResult {
        circuits: assign_lines(
            &effective_grid,
            &AssignmentParams {
                traversal: config.power_traversal,
                capacity: capacity.panels_per_circuit,
                overrides: &circuit_overrides,
            },
        ),
        data: assign_lines(
            &effective_grid,
            &AssignmentParams {
                traversal: config.data_traversal,
                capacity: capacity.panels_per_data_line,
                overrides: &data_overrides,
            },
        ),
    };

    let totals = wall_totals(config, &panel, half_panel.as_ref(), full_panels, &mix);

    let equipment = size_equipment(
        processor,
        &SizingInput {
            data_line_count: assignment.data_line_count(),
            circuit_count: assignment.circuit_count(),
            total_pixels: totals.total_pixels,
            redundancy: config.redundancy,
            processor_redundancy: config.processor_redundancy,
            connection_mode: config.connection_mode,
        },
    );

    let geometry = WallGeometry {
        wall_width_ft: totals.wall_width_ft,
        wall_height_ft: totals.wall_height_ft,
        wall_to_floor_ft: config.site.wall_to_floor_ft,
        distro_to_wall_ft: config.site.distro_to_wall_ft,
        processor_to_wall_ft: config.site.processor_to_wall_ft,
        server_to_processor_ft: config.site.server_to_processor_ft,
        cable_pick_ft: config.site.cable_pick_ft,
        drop_position: config.site.drop_position,
        power_entry: config.site.power_entry,
        dist_box_on_wall: config.site.dist_box_on_wall,
    };
    let cables = cable_plan(&CablePlanInput {
        grid: &effective_grid,
        footprint: PanelFootprint {
            width_ft: panel.width_ft,
            height_ft: panel.height_ft,
        },
        geometry: &geometry,
        assignment: &assignment,
        data_traversal: config.data_traversal,
        redundancy: config.redundancy,
        distribution_box_count: equipment.distribution_box_count,
    });

    let consumables = count_consumables(
        &assignment.data,
        totals.total_panels,
        panel.jumpers_builtin,
    );

    debug!(
        wall = config.name.as_str(),
        data_lines = assignment.data_line_count(),
        circuits = assignment.circuit_count(),
        processors = equipment.processor_count,
        "planned wall"
    );

    Ok(WallPlan {
        name: config.name.clone(),
        panel: config.panel.clone(),
        processor: config.processor.clone(),
        capacity,
        assignment,
        equipment,
        cables,
        consumables,
        totals,
    })
}

fn half_row_panel(
    catalog: &Catalog,
    config: &WallConfig,
    panel: &ResolvedPanel,
) -> Result<Option<ResolvedPanel>, PlanError> {
    if !config.half_row {
        return Ok(None);
    }
    match &panel.half_row_companion {
        Some(companion) => Ok(Some(catalog.resolved_panel(companion)?)),
        None => Ok(None),
    }
}

fn per_panel_watts(panel: &ResolvedPanel, profile: PowerProfile) -> f64 {
    match profile {
        PowerProfile::Max => panel.power_max_w,
        PowerProfile::Average => panel.power_avg_w,
    }
}

fn wall_totals(
    config: &WallConfig,
    panel: &ResolvedPanel,
    half_panel: Option<&ResolvedPanel>,
    full_panels: u32,
    mix: &PanelMix,
) -> WallTotals {
    let width = u32::from(config.grid.width());
    let height = u32::from(config.grid.height());
    let half_panels = mix.half_count;
    let watts = match config.power_profile {
        PowerProfile::Max => {
            f64::from(full_panels) * panel.power_max_w
                + f64::from(half_panels) * half_panel.map_or(0.0, |p| p.power_max_w)
        }
        PowerProfile::Average => {
            f64::from(full_panels) * panel.power_avg_w
                + f64::from(half_panels) * half_panel.map_or(0.0, |p| p.power_avg_w)
        }
    };
    WallTotals {
        full_panels,
        half_panels,
        total_panels: mix.total_panels(),
        total_pixels: mix.total_pixels(),
        res_x: width * panel.res_x,
        res_y: height * panel.res_y + half_panel.map_or(0, |p| p.res_y),
        wall_width_ft: f64::from(width) * panel.width_ft,
        wall_height_ft: f64::from(height) * panel.height_ft
            + half_panel.map_or(0.0, |p| p.height_ft),
        total_power_w: watts,
    }
}

// =========================================================================
// Tests
// =========================================================================
