//! Knockout-aware routing over the panel grid.
//!
//! Cable runs between two panels normally follow a direct Manhattan path.
//! When deleted panels block that path, the run must route around the gap;
//! the extra hops beyond the direct distance are billed as additional cable
//! length.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use wallplan_core::{PanelCoord, PanelGrid};

/// Shortest hop count between two panels, routing around deleted panels.
///
/// Tries the direct L-path first (horizontal at the start row, then vertical
/// at the end column); if it is clear, the plain Manhattan distance is
/// returned without a search. A fully blocked route falls back to the
/// Manhattan distance rather than failing the plan.
#[must_use]
pub fn detour_hops(grid: &PanelGrid, from: PanelCoord, to: PanelCoord) -> u32 {
    let direct = from.manhattan(&to);
    if direct == 0 || direct_path_clear(grid, from, to) {
        return direct;
    }

    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(from);
    queue.push_back((from, 0u32));

    while let Some((coord, dist)) = queue.pop_front() {
        if coord == to {
            return dist;
        }
        for next in neighbors(grid, coord) {
            if visited.contains(&next) {
                continue;
            }
            // Deleted panels block the route, except the destination itself.
            if grid.is_deleted(next) && next != to {
                continue;
            }
            visited.insert(next);
            queue.push_back((next, dist + 1));
        }
    }

    direct
}

fn direct_path_clear(grid: &PanelGrid, from: PanelCoord, to: PanelCoord) -> bool {
    let (min_col, max_col) = (from.col.min(to.col), from.col.max(to.col));
    for col in min_col..=max_col {
        if grid.is_deleted(PanelCoord::new(col, from.row)) {
            return false;
        }
    }
    let (min_row, max_row) = (from.row.min(to.row), from.row.max(to.row));
    for row in min_row..=max_row {
        if grid.is_deleted(PanelCoord::new(to.col, row)) {
            return false;
        }
    }
    true
}

fn neighbors(grid: &PanelGrid, coord: PanelCoord) -> impl Iterator<Item = PanelCoord> {
    let (width, height) = (grid.width(), grid.height());
    let mut out = [None; 4];
    if coord.row + 1 < height {
        out[0] = Some(PanelCoord::new(coord.col, coord.row + 1));
    }
    if coord.row > 0 {
        out[1] = Some(PanelCoord::new(coord.col, coord.row - 1));
    }
    if coord.col + 1 < width {
        out[2] = Some(PanelCoord::new(coord.col + 1, coord.row));
    }
    if coord.col > 0 {
        out[3] = Some(PanelCoord::new(coord.col - 1, coord.row));
    }
    out.into_iter().flatten()
}

// =========================================================================
// Tests
// =========================================================================
