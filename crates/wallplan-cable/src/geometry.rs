//! Wall and equipment layout inputs.

use serde::{Deserialize, Serialize};

/// Where cables leave the wall toward the floor, in front view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DropPosition {
    /// Drop at the wall's horizontal center.
    #[default]
    Behind,
    /// Stage left: the wall's right edge in front view.
    StageLeft,
    /// Stage right: the wall's left edge in front view.
    StageRight,
}

/// Which wall edge power feeds enter.
///
/// Affects which edge the power wall-run is drawn along; run lengths bill
/// the full wall height either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerEntry {
    #[default]
    Top,
    Bottom,
}

/// One panel's physical footprint in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelFootprint {
    pub width_ft: f64,
    pub height_ft: f64,
}

impl PanelFootprint {
    /// Horizontal center of a column, in feet from the wall's left edge.
    #[inline]
    #[must_use]
    pub fn column_center(&self, col: u16) -> f64 {
        (f64::from(col) + 0.5) * self.width_ft
    }

    /// Vertical center of a row, in feet from the wall's top edge.
    #[inline]
    #[must_use]
    pub fn row_center(&self, row: u16) -> f64 {
        (f64::from(row) + 0.5) * self.height_ft
    }

    /// Mean of the two panel dimensions, used to bill detour hops.
    #[inline]
    #[must_use]
    pub fn mean_dimension(&self) -> f64 {
        (self.width_ft + self.height_ft) / 2.0
    }
}

/// The geometric layout of one wall and its equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallGeometry {
    /// Wall width in feet.
    pub wall_width_ft: f64,
    /// Wall height in feet (including any trailing half row).
    pub wall_height_ft: f64,
    /// Distance from the wall's bottom edge to the floor.
    pub wall_to_floor_ft: f64,
    /// Floor run from the drop vertical to the power distro.
    pub distro_to_wall_ft: f64,
    /// Floor run from the drop vertical to the processor position.
    pub processor_to_wall_ft: f64,
    /// Configured server-to-processor standoff; not derived geometrically.
    pub server_to_processor_ft: f64,
    /// Height of the optional intermediate pick above the drop point;
    /// 0 means no pick.
    pub cable_pick_ft: f64,
    /// Where cables leave the wall.
    pub drop_position: DropPosition,
    /// Which edge power feeds enter.
    pub power_entry: PowerEntry,
    /// Whether the data distribution box hangs on the wall instead of
    /// sitting on the floor by the processor.
    pub dist_box_on_wall: bool,
}

impl WallGeometry {
    /// Horizontal drop point in feet from the wall's left edge.
    #[must_use]
    pub fn drop_x_ft(&self) -> f64 {
        match self.drop_position {
            DropPosition::Behind => self.wall_width_ft / 2.0,
            DropPosition::StageRight => 0.0,
            DropPosition::StageLeft => self.wall_width_ft,
        }
    }

    /// The grid column nearest the drop point.
    #[must_use]
    pub fn drop_col(&self, width: u16) -> u16 {
        match self.drop_position {
            DropPosition::Behind => width / 2,
            DropPosition::StageRight => 0,
            DropPosition::StageLeft => width.saturating_sub(1),
        }
    }

    /// Vertical run from the wall top to the floor, plus the pick allowance.
    #[must_use]
    pub fn vertical_drop_ft(&self) -> f64 {
        self.wall_height_ft + self.wall_to_floor_ft + self.cable_pick_ft
    }

    /// Whether an intermediate pick exists.
    #[must_use]
    pub fn has_pick(&self) -> bool {
        self.cable_pick_ft > 0.0
    }
}

impl Default for WallGeometry {
    fn default() -> Self {
        Self {
            wall_width_ft: 0.0,
            wall_height_ft: 0.0,
            wall_to_floor_ft: 5.0,
            distro_to_wall_ft: 10.0,
            processor_to_wall_ft: 15.0,
            server_to_processor_ft: 50.0,
            cable_pick_ft: 0.0,
            drop_position: DropPosition::Behind,
            power_entry: PowerEntry::Top,
            dist_box_on_wall: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_point_follows_position() {
        let mut geometry = WallGeometry {
            wall_width_ft: 20.0,
            ..WallGeometry::default()
        };
        assert_eq!(geometry.drop_x_ft(), 10.0);
        assert_eq!(geometry.drop_col(8), 4);
        geometry.drop_position = DropPosition::StageRight;
        assert_eq!(geometry.drop_x_ft(), 0.0);
        assert_eq!(geometry.drop_col(8), 0);
        geometry.drop_position = DropPosition::StageLeft;
        assert_eq!(geometry.drop_x_ft(), 20.0);
        assert_eq!(geometry.drop_col(8), 7);
    }

    #[test]
    fn vertical_drop_includes_pick_allowance() {
        let geometry = WallGeometry {
            wall_height_ft: 10.0,
            wall_to_floor_ft: 5.0,
            cable_pick_ft: 8.0,
            ..WallGeometry::default()
        };
        assert!(geometry.has_pick());
        assert_eq!(geometry.vertical_drop_ft(), 23.0);
    }
}
