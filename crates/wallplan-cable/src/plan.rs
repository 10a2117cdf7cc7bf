//! Per-wall cable run derivation.

use wallplan_core::capacity::CIRCUITS_PER_SOCA;
use wallplan_core::{PanelCoord, PanelGrid};
use wallplan_layout::{AssignmentResult, LineAssignment, Traversal};

use crate::geometry::{PanelFootprint, WallGeometry};
use crate::manifest::{
    server_run, CableClass, CableManifest, CableMedia, CableRun, FIBER_TRUNK_THRESHOLD_FT,
};
use crate::routing::detour_hops;

/// Everything the cable planner needs for one wall.
#[derive(Debug, Clone, Copy)]
pub struct CablePlanInput<'a> {
    /// The effective grid data lines were assigned on (including any
    /// trailing half row).
    pub grid: &'a PanelGrid,
    /// One panel's physical footprint.
    pub footprint: PanelFootprint,
    /// Wall and equipment layout.
    pub geometry: &'a WallGeometry,
    /// The wall's circuit and data-line assignment.
    pub assignment: &'a AssignmentResult,
    /// The data traversal, which fixes the wall edge data runs land on.
    pub data_traversal: Traversal,
    /// Whether backup data runs are required.
    pub redundancy: bool,
    /// Distribution boxes serving this wall; drives trunk runs when the box
    /// hangs on the wall.
    pub distribution_box_count: u32,
}

/// Derive the full cable manifest for one wall.
///
/// Runs are emitted in a fixed order (power, data, backup, trunk, bridge,
/// server) so the manifest is deterministic and diff-friendly.
#[must_use]
pub fn cable_plan(input: &CablePlanInput<'_>) -> CableManifest {
    let mut manifest = CableManifest::default();
    if input.grid.is_empty_live() {
        return manifest;
    }

    push_power_runs(input, &mut manifest);

    let on_wall_box = input.geometry.dist_box_on_wall && input.distribution_box_count > 0;
    if on_wall_box {
        push_fanout_runs(input, &mut manifest);
        push_trunk_runs(input, &mut manifest);
    } else {
        push_home_runs(input, &mut manifest);
    }

    push_bridge_runs(input, &mut manifest);

    manifest.runs.push(server_run(input.geometry.server_to_processor_ft));
    manifest
}

/// One SOCA feed per power-origin group, landing at the center of the
/// columns the group's circuits cover.
fn push_power_runs(input: &CablePlanInput<'_>, manifest: &mut CableManifest) {
    let geometry = input.geometry;
    let circuits = &input.assignment.circuits;
    let circuit_count = circuits.line_count();
    let soca_count = circuit_count.div_ceil(CIRCUITS_PER_SOCA);

    for soca in 0..soca_count {
        let first = soca * CIRCUITS_PER_SOCA;
        let last = (first + CIRCUITS_PER_SOCA - 1).min(circuit_count.saturating_sub(1));
        let Some((min_col, max_col)) = column_extent(circuits, first, last) else {
            // Sparse manual numbering can leave a group with no panels.
            continue;
        };
        let landing_x =
            (f64::from(min_col) + f64::from(max_col) + 1.0) / 2.0 * input.footprint.width_ft;
        let length = (landing_x - geometry.drop_x_ft()).abs()
            + geometry.vertical_drop_ft()
            + geometry.distro_to_wall_ft;
        manifest.runs.push(CableRun::new(
            CableClass::Power,
            CableMedia::Soca,
            Some(soca),
            length,
        ));
    }
}

fn column_extent(circuits: &LineAssignment, first: u32, last: u32) -> Option<(u16, u16)> {
    let mut extent: Option<(u16, u16)> = None;
    for circuit in first..=last {
        for coord in circuits.members(circuit) {
            extent = Some(match extent {
                None => (coord.col, coord.col),
                Some((min, max)) => (min.min(coord.col), max.max(coord.col)),
            });
        }
    }
    extent
}

/// Home runs from the processor to each data line entry, when there is no
/// on-wall distribution box. Backup runs mirror the primaries under
/// redundancy; the physical lateral offset between the two bundles does not
/// change length.
fn push_home_runs(input: &CablePlanInput<'_>, manifest: &mut CableManifest) {
    let geometry = input.geometry;
    let data = &input.assignment.data;
    let mut lengths = Vec::new();

    for (line, _) in data.lines() {
        let Some(entry) = data.entry(line) else {
            continue;
        };
        let landing_x = input.footprint.column_center(entry.col);
        let length = (landing_x - geometry.drop_x_ft()).abs()
            + geometry.vertical_drop_ft()
            + geometry.processor_to_wall_ft
            + knockout_extra(input, drop_edge_coord(input), entry);
        lengths.push((line, length));
    }

    for (line, length) in &lengths {
        manifest.runs.push(CableRun::new(
            CableClass::DataPrimary,
            CableMedia::Cat6,
            Some(*line),
            *length,
        ));
    }
    if input.redundancy {
        for (line, length) in &lengths {
            manifest.runs.push(CableRun::new(
                CableClass::DataBackup,
                CableMedia::Cat6,
                Some(*line),
                *length,
            ));
        }
    }
}

/// Fan-out runs from an on-wall distribution box (top center) to each data
/// line entry.
fn push_fanout_runs(input: &CablePlanInput<'_>, manifest: &mut CableManifest) {
    let geometry = input.geometry;
    let data = &input.assignment.data;
    let box_coord = PanelCoord::new(input.grid.width() / 2, 0);
    let box_x = geometry.wall_width_ft / 2.0;
    let box_y = input.footprint.height_ft * 0.5;
    let mut lengths = Vec::new();

    for (line, _) in data.lines() {
        let Some(entry) = data.entry(line) else {
            continue;
        };
        let horizontal = (input.footprint.column_center(entry.col) - box_x).abs();
        let vertical = (input.footprint.row_center(entry.row) - box_y).abs();
        let length = horizontal
            + vertical
            + knockout_extra(input, box_coord, entry)
            + geometry.cable_pick_ft;
        lengths.push((line, length));
    }

    for (line, length) in &lengths {
        manifest.runs.push(CableRun::new(
            CableClass::DataPrimary,
            CableMedia::Cat6,
            Some(*line),
            *length,
        ));
    }
    if input.redundancy {
        for (line, length) in &lengths {
            manifest.runs.push(CableRun::new(
                CableClass::DataBackup,
                CableMedia::Cat6,
                Some(*line),
                *length,
            ));
        }
    }
}

/// Main and backup trunk runs from the processor up to each on-wall box.
fn push_trunk_runs(input: &CablePlanInput<'_>, manifest: &mut CableManifest) {
    let geometry = input.geometry;
    let length = geometry.processor_to_wall_ft + geometry.vertical_drop_ft();
    let media = if length > FIBER_TRUNK_THRESHOLD_FT {
        CableMedia::Fiber
    } else {
        CableMedia::Cat6
    };
    for index in 0..input.distribution_box_count {
        // One main and one backup trunk per box.
        for _ in 0..2 {
            manifest
                .runs
                .push(CableRun::new(CableClass::Trunk, media, Some(index), length));
        }
    }
}

/// Bridge jumpers where consecutive panels of a data line are not
/// physically adjacent (knockout gaps or override stitching).
fn push_bridge_runs(input: &CablePlanInput<'_>, manifest: &mut CableManifest) {
    let data = &input.assignment.data;
    for (line, members) in data.lines() {
        for pair in members.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            let col_diff = prev.col.abs_diff(curr.col);
            let row_diff = prev.row.abs_diff(curr.row);
            let adjacent = (col_diff == 0 && row_diff == 1) || (col_diff == 1 && row_diff == 0);
            if adjacent {
                continue;
            }
            let length = f64::from(col_diff) * input.footprint.width_ft
                + f64::from(row_diff) * input.footprint.height_ft
                + input.geometry.cable_pick_ft;
            manifest.runs.push(CableRun::new(
                CableClass::Bridge,
                CableMedia::Cat6,
                Some(line),
                length,
            ));
        }
    }
}

/// The wall-edge coordinate a data run leaves from: the drop column, on the
/// edge the traversal enters.
fn drop_edge_coord(input: &CablePlanInput<'_>) -> PanelCoord {
    let row = if input.data_traversal.starts_at_bottom() {
        input.grid.height().saturating_sub(1)
    } else {
        0
    };
    PanelCoord::new(input.geometry.drop_col(input.grid.width()), row)
}

/// Extra length when knockouts force a run to detour around the grid.
fn knockout_extra(input: &CablePlanInput<'_>, from: PanelCoord, to: PanelCoord) -> f64 {
    let detour = detour_hops(input.grid, from, to);
    let direct = from.manhattan(&to);
    if detour > direct {
        f64::from(detour - direct) * input.footprint.mean_dimension()
    } else {
        0.0
    }
}

// =========================================================================
// Tests
// =========================================================================
