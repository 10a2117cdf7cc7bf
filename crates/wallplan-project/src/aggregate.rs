//! Multi-wall aggregation over shared processor pools.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wallplan_cable::{server_run, CableRun};
use wallplan_core::{Catalog, ConnectionMode, PlanError};
use wallplan_gear::{size_equipment, EquipmentPlan, SizingInput};

use crate::config::WallConfig;
use crate::wall::{plan_wall, WallPlan};

/// Walls sharing one processor model, sized as a single capacity pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorGroup {
    /// Processor model id.
    pub processor: String,
    /// Indices into the project's wall list, ascending.
    pub wall_indices: Vec<usize>,
    /// The wall that represents the group for display purposes: the lowest
    /// wall index.
    pub first_wall: usize,
    /// Summed data lines across the group.
    pub data_line_total: u32,
    /// Summed live pixels across the group.
    pub pixel_total: u64,
    /// Equipment sized once from the group sums. SOCA counts stay per wall
    /// (power is never pooled) and are zero here.
    pub equipment: EquipmentPlan,
}

/// A full multi-wall project plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPlan {
    /// Per-wall plans, in input order.
    pub walls: Vec<WallPlan>,
    /// Shared processor pools, ordered by first wall index.
    pub groups: Vec<ProcessorGroup>,
    /// Project-wide cabling: the server feed pair, sized against the
    /// longest run any wall needs (a single server feeds all processors;
    /// undersizing would leave a wall unreachable).
    pub system_cables: Vec<CableRun>,
}

/// Plan every wall and fold shared equipment across walls.
///
/// Boxes and processors are shared capacity pools across walls on the same
/// processor selection, so the sizer runs once per group on the summed lines
/// and pixels, not per wall. A group inherits redundancy and distributed
/// mode if any member wall requests them.
pub fn plan_project(catalog: &Catalog, configs: &[WallConfig]) -> Result<ProjectPlan, PlanError> {
    let mut walls = Vec::with_capacity(configs.len());
    for config in configs {
        walls.push(plan_wall(catalog, config)?);
    }

    let mut accumulators: BTreeMap<&str, GroupAccumulator> = BTreeMap::new();
    for (index, (config, plan)) in configs.iter().zip(&walls).enumerate() {
        let entry = accumulators
            .entry(config.processor.as_str())
            .or_insert_with(|| GroupAccumulator::new(index));
        entry.wall_indices.push(index);
        entry.data_line_total += plan.assignment.data_line_count();
        entry.pixel_total += plan.totals.total_pixels;
        entry.redundancy |= config.redundancy;
        entry.processor_redundancy |= config.processor_redundancy;
        entry.distributed |= config.connection_mode == ConnectionMode::Distributed;
    }

    let mut groups = Vec::with_capacity(accumulators.len());
    for (processor_id, accumulator) in accumulators {
        let processor = catalog.processor(processor_id)?;
        let equipment = size_equipment(
            processor,
            &SizingInput {
                data_line_count: accumulator.data_line_total,
                circuit_count: 0,
                total_pixels: accumulator.pixel_total,
                redundancy: accumulator.redundancy,
                processor_redundancy: accumulator.processor_redundancy,
                connection_mode: if accumulator.distributed {
                    ConnectionMode::Distributed
                } else {
                    ConnectionMode::Direct
                },
            },
        );
        groups.push(ProcessorGroup {
            processor: processor_id.to_string(),
            wall_indices: accumulator.wall_indices,
            first_wall: accumulator.first_wall,
            data_line_total: accumulator.data_line_total,
            pixel_total: accumulator.pixel_total,
            equipment,
        });
    }
    groups.sort_by_key(|group| group.first_wall);

    Ok(ProjectPlan {
        system_cables: system_cables(configs, &walls),
        walls,
        groups,
    })
}

struct GroupAccumulator {
    first_wall: usize,
    wall_indices: Vec<usize>,
    data_line_total: u32,
    pixel_total: u64,
    redundancy: bool,
    processor_redundancy: bool,
    distributed: bool,
}

impl GroupAccumulator {
    fn new(first_wall: usize) -> Self {
        Self {
            first_wall,
            wall_indices: Vec::new(),
            data_line_total: 0,
            pixel_total: 0,
            redundancy: false,
            processor_redundancy: false,
            distributed: false,
        }
    }
}

/// The server feed pair (primary + backup), sized against the longest
/// server-to-processor run across all live walls.
fn system_cables(configs: &[WallConfig], walls: &[WallPlan]) -> Vec<CableRun> {
    let longest = configs
        .iter()
        .zip(walls)
        .filter(|(_, plan)| plan.totals.total_panels > 0)
        .map(|(config, _)| config.site.server_to_processor_ft)
        .fold(0.0f64, f64::max);
    if longest <= 0.0 {
        return Vec::new();
    }
    vec![server_run(longest), server_run(longest)]
}

// =========================================================================
// Tests
// =========================================================================
