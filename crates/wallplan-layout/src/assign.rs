//! The line assignment algorithm.
//!
//! Auto-assignment walks the grid in the chosen traversal order with a
//! running line counter and an in-line panel count. Manual overrides are
//! pre-scanned into a used-index set; the counter steps over used indices
//! before every automatic assignment, so an automatic line never collides
//! with a manual one. Overridden panels keep their manual index and are not
//! counted against capacity.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use wallplan_core::{OverrideMap, PanelCoord, PanelGrid};

use crate::traversal::Traversal;

/// Parameters for one resource's assignment pass.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentParams<'a> {
    /// Visit order over the grid.
    pub traversal: Traversal,
    /// Maximum auto-assigned panels per line. Values below 1 are treated
    /// as 1. Ignored by column-per-line traversals.
    pub capacity: u32,
    /// Manual 1-based per-panel assignments.
    pub overrides: &'a OverrideMap,
}

/// The assignment of every live panel to one resource line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineAssignment {
    indices: FxHashMap<PanelCoord, u32>,
    lines: BTreeMap<u32, Vec<PanelCoord>>,
    line_count: u32,
}

impl LineAssignment {
    /// The 0-based line index of a panel, if it is live.
    pub fn line_of(&self, coord: PanelCoord) -> Option<u32> {
        self.indices.get(&coord).copied()
    }

    /// `1 + max(assigned index)`, or 0 when no panel is assigned.
    #[must_use]
    pub const fn line_count(&self) -> u32 {
        self.line_count
    }

    /// Number of assigned panels.
    pub fn assigned_count(&self) -> usize {
        self.indices.len()
    }

    /// Member panels of a line, in traversal order.
    pub fn members(&self, line: u32) -> &[PanelCoord] {
        self.lines.get(&line).map_or(&[], Vec::as_slice)
    }

    /// The first panel of a line in traversal order (its cable entry).
    pub fn entry(&self, line: u32) -> Option<PanelCoord> {
        self.members(line).first().copied()
    }

    /// The last panel of a line in traversal order (its cable exit).
    pub fn exit(&self, line: u32) -> Option<PanelCoord> {
        self.members(line).last().copied()
    }

    /// Iterate `(line, members)` for every populated line, ascending.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &[PanelCoord])> {
        self.lines.iter().map(|(line, members)| (*line, members.as_slice()))
    }

    /// Distinct columns touched by a line.
    pub fn column_span(&self, line: u32) -> usize {
        let mut cols: Vec<u16> = self.members(line).iter().map(|c| c.col).collect();
        cols.sort_unstable();
        cols.dedup();
        cols.len()
    }

    fn record(&mut self, coord: PanelCoord, line: u32) {
        self.indices.insert(coord, line);
        self.lines.entry(line).or_default().push(coord);
        if line + 1 > self.line_count {
            self.line_count = line + 1;
        }
    }
}

/// Assign every live panel of `grid` to a line.
#[must_use]
pub fn assign_lines(grid: &PanelGrid, params: &AssignmentParams<'_>) -> LineAssignment {
    let used = params.overrides.used_indices(grid);
    if params.traversal.is_column_per_line() {
        assign_column_per_line(grid, params, &used)
    } else {
        assign_capacity_grouped(grid, params, &used)
    }
}

fn skip_used(counter: &mut u32, used: &FxHashSet<u32>) {
    while used.contains(counter) {
        *counter += 1;
    }
}

fn assign_capacity_grouped(
    grid: &PanelGrid,
    params: &AssignmentParams<'_>,
    used: &FxHashSet<u32>,
) -> LineAssignment {
    let capacity = params.capacity.max(1);
    let mut result = LineAssignment::default();
    let mut counter = 0u32;
    let mut in_line = 0u32;

    for coord in params.traversal.order(grid) {
        let line = match params.overrides.index_of(coord) {
            Some(manual) => manual,
            None => {
                skip_used(&mut counter, used);
                let line = counter;
                in_line += 1;
                if in_line >= capacity {
                    counter += 1;
                    in_line = 0;
                    skip_used(&mut counter, used);
                }
                line
            }
        };
        result.record(coord, line);
    }
    result
}

fn assign_column_per_line(
    grid: &PanelGrid,
    params: &AssignmentParams<'_>,
    used: &FxHashSet<u32>,
) -> LineAssignment {
    let mut result = LineAssignment::default();
    let mut counter = 0u32;

    for col in 0..grid.width() {
        skip_used(&mut counter, used);
        for coord in params.traversal.column_order(grid, col) {
            let line = params.overrides.index_of(coord).unwrap_or(counter);
            result.record(coord, line);
        }
        // The column consumes its index even when every panel in it was
        // deleted or manually reassigned.
        counter += 1;
    }
    result
}

/// The combined per-panel circuit and data-line assignment for one wall.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentResult {
    /// Power-circuit assignment.
    pub circuits: LineAssignment,
    /// Data-line assignment.
    pub data: LineAssignment,
}

impl AssignmentResult {
    /// `1 + max(circuit index)`, 0 for an empty grid.
    #[must_use]
    pub const fn circuit_count(&self) -> u32 {
        self.circuits.line_count()
    }

    /// `1 + max(data line index)`, 0 for an empty grid.
    #[must_use]
    pub const fn data_line_count(&self) -> u32 {
        self.data.line_count()
    }

    /// Both indices for one panel, if it is live.
    pub fn panel(&self, coord: PanelCoord) -> Option<(u32, u32)> {
        Some((self.circuits.line_of(coord)?, self.data.line_of(coord)?))
    }
}

// =========================================================================
// Tests
// =========================================================================
