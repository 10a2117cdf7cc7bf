//! Traversal orders over the panel grid.

use serde::{Deserialize, Serialize};
use wallplan_core::{PanelCoord, PanelGrid};

/// The order panels are visited during assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Traversal {
    /// Columns left to right; even columns run top-down, odd columns
    /// bottom-up. The data-side default.
    #[default]
    SerpentineTop,
    /// Columns left to right; even columns run bottom-up, odd columns
    /// top-down.
    SerpentineBottom,
    /// Every column runs top-down and capacity grouping continues across
    /// column boundaries. The power-side default.
    ColumnMajor,
    /// Every column is an independent line starting at the top edge;
    /// capacity is ignored.
    ColumnPerLineTop,
    /// Every column is an independent line starting at the bottom edge;
    /// capacity is ignored.
    ColumnPerLineBottom,
}

impl Traversal {
    /// Whether each column maps to its own line regardless of capacity.
    #[must_use]
    pub const fn is_column_per_line(self) -> bool {
        matches!(self, Self::ColumnPerLineTop | Self::ColumnPerLineBottom)
    }

    /// Whether the traversal enters the wall at the bottom edge.
    #[must_use]
    pub const fn starts_at_bottom(self) -> bool {
        matches!(self, Self::SerpentineBottom | Self::ColumnPerLineBottom)
    }

    /// Whether the given column is walked top-down.
    #[must_use]
    pub const fn column_goes_down(self, col: u16) -> bool {
        match self {
            Self::SerpentineTop => col % 2 == 0,
            Self::SerpentineBottom => col % 2 == 1,
            Self::ColumnMajor | Self::ColumnPerLineTop => true,
            Self::ColumnPerLineBottom => false,
        }
    }

    /// The live panels of one column in visit order.
    pub fn column_order(self, grid: &PanelGrid, col: u16) -> Vec<PanelCoord> {
        let mut coords: Vec<PanelCoord> = grid.live_in_column(col).collect();
        if !self.column_goes_down(col) {
            coords.reverse();
        }
        coords
    }

    /// All live panels in visit order.
    pub fn order(self, grid: &PanelGrid) -> Vec<PanelCoord> {
        let mut out = Vec::with_capacity(grid.live_count() as usize);
        for col in 0..grid.width() {
            out.extend(self.column_order(grid, col));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(u16, u16)]) -> Vec<PanelCoord> {
        pairs.iter().map(|(c, r)| PanelCoord::new(*c, *r)).collect()
    }

    #[test]
    fn serpentine_top_alternates_direction() {
        let grid = PanelGrid::new(3, 2);
        assert_eq!(
            Traversal::SerpentineTop.order(&grid),
            coords(&[(0, 0), (0, 1), (1, 1), (1, 0), (2, 0), (2, 1)])
        );
    }

    #[test]
    fn serpentine_bottom_starts_upward() {
        let grid = PanelGrid::new(2, 3);
        assert_eq!(
            Traversal::SerpentineBottom.order(&grid),
            coords(&[(0, 2), (0, 1), (0, 0), (1, 0), (1, 1), (1, 2)])
        );
    }

    #[test]
    fn column_major_never_alternates() {
        let grid = PanelGrid::new(2, 2);
        assert_eq!(
            Traversal::ColumnMajor.order(&grid),
            coords(&[(0, 0), (0, 1), (1, 0), (1, 1)])
        );
    }

    #[test]
    fn deleted_panels_are_skipped_in_order() {
        let mut grid = PanelGrid::new(2, 3);
        grid.delete(PanelCoord::new(0, 1));
        assert_eq!(
            Traversal::SerpentineTop.order(&grid),
            coords(&[(0, 0), (0, 2), (1, 2), (1, 1), (1, 0)])
        );
    }
}
