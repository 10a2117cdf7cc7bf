//! Property-style invariants for the line assignment engine.
//!
//! This suite drives randomized grids, deletions, overrides, and capacities
//! through the public assignment API and asserts the engine's contract:
//! deterministic replay, override precedence, capacity conservation, and
//! index isolation between manual and automatic lines.

use proptest::prelude::*;
use wallplan_core::{OverrideMap, PanelCoord, PanelGrid};
use wallplan_layout::{assign_lines, AssignmentParams, Traversal};

const TRAVERSALS: [Traversal; 5] = [
    Traversal::SerpentineTop,
    Traversal::SerpentineBottom,
    Traversal::ColumnMajor,
    Traversal::ColumnPerLineTop,
    Traversal::ColumnPerLineBottom,
];

#[derive(Debug, Clone)]
struct Scenario {
    width: u16,
    height: u16,
    deleted: Vec<(u16, u16)>,
    overrides: Vec<((u16, u16), u32)>,
    capacity: u32,
    traversal: Traversal,
}

fn scenario() -> impl Strategy<Value = Scenario> {
    (
        1u16..10,
        1u16..10,
        prop::collection::vec(((0u16..10), (0u16..10)), 0..8),
        prop::collection::vec((((0u16..10), (0u16..10)), 1u32..12), 0..5),
        1u32..12,
        0usize..TRAVERSALS.len(),
    )
        .prop_map(
            |(width, height, deleted, overrides, capacity, traversal)| Scenario {
                width,
                height,
                deleted,
                overrides,
                capacity,
                traversal: TRAVERSALS[traversal],
            },
        )
}

fn build(scenario: &Scenario) -> (PanelGrid, OverrideMap) {
    let mut grid = PanelGrid::new(scenario.width, scenario.height);
    for (col, row) in &scenario.deleted {
        grid.delete(PanelCoord::new(*col, *row));
    }
    let mut overrides = OverrideMap::new();
    for ((col, row), line) in &scenario.overrides {
        overrides.set(PanelCoord::new(*col, *row), *line);
    }
    overrides.prune(&grid);
    (grid, overrides)
}

proptest! {
    /// Re-running the engine on identical inputs yields an identical result.
    #[test]
    fn assignment_is_deterministic(scenario in scenario()) {
        let (grid, overrides) = build(&scenario);
        let params = AssignmentParams {
            traversal: scenario.traversal,
            capacity: scenario.capacity,
            overrides: &overrides,
        };
        let first = assign_lines(&grid, &params);
        let second = assign_lines(&grid, &params);
        prop_assert_eq!(first, second);
    }

    /// Every live overridden panel lands exactly on its override minus one.
    #[test]
    fn overrides_always_win(scenario in scenario()) {
        let (grid, overrides) = build(&scenario);
        let params = AssignmentParams {
            traversal: scenario.traversal,
            capacity: scenario.capacity,
            overrides: &overrides,
        };
        let result = assign_lines(&grid, &params);
        for (coord, line) in overrides.iter() {
            if grid.is_live(coord) {
                prop_assert_eq!(result.line_of(coord), Some(line - 1));
            } else {
                prop_assert_eq!(result.line_of(coord), None);
            }
        }
    }

    /// Auto-assigned panels never land on an index claimed by an override.
    #[test]
    fn auto_lines_never_collide_with_manual_lines(scenario in scenario()) {
        let (grid, overrides) = build(&scenario);
        let params = AssignmentParams {
            traversal: scenario.traversal,
            capacity: scenario.capacity,
            overrides: &overrides,
        };
        let result = assign_lines(&grid, &params);
        let used = overrides.used_indices(&grid);
        for coord in grid.live_panels() {
            if overrides.get(coord).is_none() {
                let line = result.line_of(coord).expect("live panel assigned");
                prop_assert!(
                    !used.contains(&line),
                    "auto panel {coord} reused manual line {line}"
                );
            }
        }
    }

    /// No more than `capacity` consecutive auto-assigned panels share a line.
    #[test]
    fn capacity_is_conserved(scenario in scenario()) {
        let (grid, overrides) = build(&scenario);
        let params = AssignmentParams {
            traversal: scenario.traversal,
            capacity: scenario.capacity,
            overrides: &overrides,
        };
        let result = assign_lines(&grid, &params);
        if scenario.traversal.is_column_per_line() {
            return Ok(());
        }
        let mut run_line = None;
        let mut run_len = 0u32;
        for coord in scenario.traversal.order(&grid) {
            if overrides.get(coord).is_some() {
                continue;
            }
            let line = result.line_of(coord).expect("live panel assigned");
            if Some(line) == run_line {
                run_len += 1;
            } else {
                run_line = Some(line);
                run_len = 1;
            }
            prop_assert!(run_len <= scenario.capacity.max(1));
        }
    }

    /// Every live panel is assigned; no deleted panel is.
    #[test]
    fn coverage_is_exact(scenario in scenario()) {
        let (grid, overrides) = build(&scenario);
        let params = AssignmentParams {
            traversal: scenario.traversal,
            capacity: scenario.capacity,
            overrides: &overrides,
        };
        let result = assign_lines(&grid, &params);
        prop_assert_eq!(result.assigned_count() as u32, grid.live_count());
        for (col, row) in &scenario.deleted {
            let coord = PanelCoord::new(*col, *row);
            if grid.contains(coord) {
                prop_assert_eq!(result.line_of(coord), None);
            }
        }
    }

    /// line_count is exactly one past the highest populated index.
    #[test]
    fn line_count_matches_max_index(scenario in scenario()) {
        let (grid, overrides) = build(&scenario);
        let params = AssignmentParams {
            traversal: scenario.traversal,
            capacity: scenario.capacity,
            overrides: &overrides,
        };
        let result = assign_lines(&grid, &params);
        let max = grid
            .live_panels()
            .filter_map(|c| result.line_of(c))
            .max();
        match max {
            Some(max) => prop_assert_eq!(result.line_count(), max + 1),
            None => prop_assert_eq!(result.line_count(), 0),
        }
    }
}
