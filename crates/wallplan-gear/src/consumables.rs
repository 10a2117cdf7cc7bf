//! Line-level consumables: jumpers and couplers.
//!
//! Panels daisy-chain within a data line over short jumpers. A line that
//! spans more than one column needs a cross jumper per column transition;
//! panels with built-in jumpers instead consume couplers at the same seams
//! plus one per line head.

use serde::{Deserialize, Serialize};
use wallplan_layout::LineAssignment;

/// Jumper and coupler counts for one wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumables {
    /// Column-transition jumpers across all data lines.
    pub cross_jumpers: u32,
    /// Couplers for built-in-jumper panels; 0 otherwise.
    pub couplers: u32,
    /// Per-panel data jumpers for loose-jumper panels; 0 otherwise.
    pub data_jumpers: u32,
    /// Per-panel power jumpers for loose-jumper panels; 0 otherwise.
    pub power_jumpers: u32,
}

/// Count consumables from the data-line assignment.
#[must_use]
pub fn count_consumables(
    data: &LineAssignment,
    live_panels: u32,
    jumpers_builtin: bool,
) -> Consumables {
    let mut cross_jumpers = 0u32;
    for (line, _) in data.lines() {
        let span = data.column_span(line) as u32;
        cross_jumpers += span.saturating_sub(1);
    }

    if jumpers_builtin {
        Consumables {
            cross_jumpers,
            couplers: cross_jumpers + data.line_count(),
            data_jumpers: 0,
            power_jumpers: 0,
        }
    } else {
        Consumables {
            cross_jumpers,
            couplers: 0,
            data_jumpers: live_panels,
            power_jumpers: live_panels,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use wallplan_core::{OverrideMap, PanelGrid};
    use wallplan_layout::{assign_lines, AssignmentParams, Traversal};

    fn data_lines(width: u16, height: u16, capacity: u32) -> LineAssignment {
        let grid = PanelGrid::new(width, height);
        let overrides = OverrideMap::new();
        assign_lines(
            &grid,
            &AssignmentParams {
                traversal: Traversal::SerpentineTop,
                capacity,
                overrides: &overrides,
            },
        )
    }

    #[test]
    fn multi_column_lines_need_cross_jumpers() {
        // 4x3 at capacity 6: two lines, each spanning two columns.
        let data = data_lines(4, 3, 6);
        let counts = count_consumables(&data, 12, false);
        assert_eq!(counts.cross_jumpers, 2);
        assert_eq!(counts.data_jumpers, 12);
        assert_eq!(counts.power_jumpers, 12);
        assert_eq!(counts.couplers, 0);
    }

    #[test]
    fn single_column_lines_need_none() {
        let data = data_lines(3, 4, 4);
        let counts = count_consumables(&data, 12, false);
        assert_eq!(counts.cross_jumpers, 0);
    }

    #[test]
    fn builtin_jumper_panels_take_couplers_instead() {
        let data = data_lines(4, 3, 6);
        let counts = count_consumables(&data, 12, true);
        assert_eq!(counts.couplers, 2 + 2);
        assert_eq!(counts.data_jumpers, 0);
        assert_eq!(counts.power_jumpers, 0);
    }
}
