//! The addressable panel space and sparse manual overrides.
//!
//! A wall is a `width` × `height` grid of panels addressed by
//! [`PanelCoord`]. Panels can be knocked out of the wall (deleted); deleted
//! coordinates accumulate across resizes, so the grid prunes out-of-bounds
//! entries whenever its dimensions change. Stale entries must never affect
//! counts.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A panel position: 0-indexed column and row, origin at the top-left in
/// front view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct PanelCoord {
    /// Column, 0-indexed from the wall's left edge.
    pub col: u16,
    /// Row, 0-indexed from the wall's top edge.
    pub row: u16,
}

impl PanelCoord {
    /// Create a coordinate.
    #[inline]
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// Manhattan distance to another coordinate, in panel hops.
    #[inline]
    pub const fn manhattan(&self, other: &PanelCoord) -> u32 {
        self.col.abs_diff(other.col) as u32 + self.row.abs_diff(other.row) as u32
    }
}

impl fmt::Display for PanelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.col + 1, self.row + 1)
    }
}

/// The panel grid: dimensions plus the set of deleted (absent) panels.
///
/// A coordinate is *live* iff it is in bounds and not deleted. The deleted
/// set may temporarily hold coordinates from a previous, larger grid; those
/// are dead weight and are pruned on every resize (and defensively by
/// [`PanelGrid::prune`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelGrid {
    width: u16,
    height: u16,
    deleted: FxHashSet<PanelCoord>,
}

impl PanelGrid {
    /// Create a grid with no deleted panels.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            deleted: FxHashSet::default(),
        }
    }

    /// Grid width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total addressable positions, live or not.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Whether the coordinate is inside the grid bounds.
    #[inline]
    pub const fn contains(&self, coord: PanelCoord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Whether the coordinate addresses a live (present) panel.
    #[inline]
    pub fn is_live(&self, coord: PanelCoord) -> bool {
        self.contains(coord) && !self.deleted.contains(&coord)
    }

    /// Whether the coordinate is a deleted in-bounds panel.
    #[inline]
    pub fn is_deleted(&self, coord: PanelCoord) -> bool {
        self.contains(coord) && self.deleted.contains(&coord)
    }

    /// Number of live panels.
    pub fn live_count(&self) -> u32 {
        // Deleted entries are pruned on resize, but count defensively against
        // out-of-bounds strays anyway.
        let stale = self
            .deleted
            .iter()
            .filter(|c| !self.contains(**c))
            .count() as u32;
        self.total() - (self.deleted.len() as u32 - stale)
    }

    /// Whether the grid has no live panels.
    pub fn is_empty_live(&self) -> bool {
        self.live_count() == 0
    }

    /// Mark a panel as deleted. Out-of-bounds coordinates are ignored.
    pub fn delete(&mut self, coord: PanelCoord) {
        if self.contains(coord) {
            self.deleted.insert(coord);
        }
    }

    /// Restore a previously deleted panel.
    pub fn restore(&mut self, coord: PanelCoord) {
        self.deleted.remove(&coord);
    }

    /// Replace the grid dimensions, pruning deleted entries that fall out of
    /// the new bounds.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.prune();
    }

    /// Drop deleted entries that reference out-of-bounds coordinates.
    ///
    /// Returns the number of stale entries removed. Idempotent: pruning twice
    /// yields the same grid as pruning once.
    pub fn prune(&mut self) -> usize {
        let before = self.deleted.len();
        let (width, height) = (self.width, self.height);
        self.deleted
            .retain(|c| c.col < width && c.row < height);
        before - self.deleted.len()
    }

    /// Iterate live panels of one column, top to bottom.
    pub fn live_in_column(&self, col: u16) -> impl Iterator<Item = PanelCoord> + '_ {
        (0..self.height)
            .map(move |row| PanelCoord::new(col, row))
            .filter(|c| self.is_live(*c))
    }

    /// Iterate all live panels in column-major order (left to right, top to
    /// bottom within each column).
    pub fn live_panels(&self) -> impl Iterator<Item = PanelCoord> + '_ {
        (0..self.width).flat_map(move |col| self.live_in_column(col))
    }

    /// A copy of this grid with a different height and the same deletions
    /// (pruned to the new bounds).
    pub fn with_height(&self, height: u16) -> PanelGrid {
        let mut grid = self.clone();
        grid.resize(self.width, height);
        grid
    }
}

/// Sparse manual line/circuit assignments keyed by panel coordinate.
///
/// Values are stored 1-based, matching how operators label lines. Setting a
/// value of 0 clears the override: 0/blank uniformly means "no override, use
/// auto-assignment".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideMap {
    entries: FxHashMap<PanelCoord, u32>,
}

impl OverrideMap {
    /// Create an empty override map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 1-based override for a panel. A value of 0 clears it.
    pub fn set(&mut self, coord: PanelCoord, line: u32) {
        if line == 0 {
            self.entries.remove(&coord);
        } else {
            self.entries.insert(coord, line);
        }
    }

    /// Clear the override for a panel.
    pub fn clear(&mut self, coord: PanelCoord) {
        self.entries.remove(&coord);
    }

    /// The 1-based override for a panel, if any.
    pub fn get(&self, coord: PanelCoord) -> Option<u32> {
        self.entries.get(&coord).copied()
    }

    /// The 0-based line index claimed by a panel's override, if any.
    pub fn index_of(&self, coord: PanelCoord) -> Option<u32> {
        self.entries.get(&coord).map(|line| line - 1)
    }

    /// Number of overridden panels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no overrides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop overrides referencing out-of-bounds coordinates.
    ///
    /// Overrides on deleted-but-in-bounds panels are kept: they become
    /// meaningful again if the panel is restored, and assignment ignores
    /// them while the panel is absent.
    pub fn prune(&mut self, grid: &PanelGrid) -> usize {
        let before = self.entries.len();
        self.entries.retain(|coord, _| grid.contains(*coord));
        before - self.entries.len()
    }

    /// The set of 0-based line indices claimed by overrides on live panels.
    ///
    /// Auto-assignment skips over every index in this set so a manual line is
    /// never shared with auto-assigned panels.
    pub fn used_indices(&self, grid: &PanelGrid) -> FxHashSet<u32> {
        self.entries
            .iter()
            .filter(|(coord, _)| grid.is_live(**coord))
            .map(|(_, line)| line - 1)
            .collect()
    }

    /// Iterate `(coord, 1-based line)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (PanelCoord, u32)> + '_ {
        self.entries.iter().map(|(c, l)| (*c, *l))
    }
}

// Serialize as a sorted entry list so snapshots are deterministic and JSON
// friendly (coordinate-keyed maps are not valid JSON objects).
impl Serialize for OverrideMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(PanelCoord, u32)> =
            self.entries.iter().map(|(c, l)| (*c, *l)).collect();
        entries.sort_unstable();
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for (coord, line) in entries {
            seq.serialize_element(&OverrideEntry {
                col: coord.col,
                row: coord.row,
                line,
            })?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for OverrideMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OverrideMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of override entries")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut map = OverrideMap::new();
                while let Some(entry) = seq.next_element::<OverrideEntry>()? {
                    map.set(PanelCoord::new(entry.col, entry.row), entry.line);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_seq(EntriesVisitor)
    }
}

#[derive(Serialize, Deserialize)]
struct OverrideEntry {
    col: u16,
    row: u16,
    line: u32,
}

// =========================================================================
// Tests
// =========================================================================
