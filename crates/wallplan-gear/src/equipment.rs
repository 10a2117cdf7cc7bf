//! Processor and distribution box sizing.

use serde::{Deserialize, Serialize};
use wallplan_core::capacity::CIRCUITS_PER_SOCA;
use wallplan_core::{ConnectionMode, PortTopology, ProcessorSpec, RedundancyRule};

/// Line and pixel totals the sizer works from. Per-wall callers pass one
/// wall's totals; the aggregator passes group sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingInput {
    /// Data lines needed; each line occupies one port.
    pub data_line_count: u32,
    /// Power circuits needed.
    pub circuit_count: u32,
    /// Total live pixels driven.
    pub total_pixels: u64,
    /// Whether backup data distribution is required.
    pub redundancy: bool,
    /// Whether the final processor count is doubled for failover.
    pub processor_redundancy: bool,
    /// Mode selection for switchable-topology processors.
    pub connection_mode: ConnectionMode,
}

/// Sized equipment for one wall or one shared processor group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentPlan {
    /// Processors to provision.
    pub processor_count: u32,
    /// Distribution boxes to provision; 0 for direct topologies.
    pub distribution_box_count: u32,
    /// Marketing name of the distribution box, when one is used.
    pub distribution_box_name: Option<String>,
    /// SOCA power-origin groups (6 circuits each).
    pub soca_group_count: u32,
    /// Ports before redundancy doubling.
    pub ports_needed: u32,
    /// Ports after redundancy doubling.
    pub ports_needed_final: u32,
}

/// Size processors and distribution hardware for the given totals.
#[must_use]
pub fn size_equipment(processor: &ProcessorSpec, input: &SizingInput) -> EquipmentPlan {
    let ports = input.data_line_count;
    let ports_final = if input.redundancy { ports * 2 } else { ports };

    // No live panels: every count is a well-defined zero.
    if ports == 0 && input.total_pixels == 0 {
        return EquipmentPlan {
            ports_needed: 0,
            ports_needed_final: 0,
            ..EquipmentPlan::default()
        };
    }

    let by_pixels = div_ceil_u64(input.total_pixels, processor.total_pixels);

    let (mut processor_count, distribution_box_count, distribution_box_name) =
        match effective_topology(&processor.topology, input.connection_mode) {
            Effective::Distributed {
                ports_per_box,
                boxes_per_processor,
                box_name,
                redundancy,
            } => {
                let boxes = match redundancy {
                    RedundancyRule::DoubleBoxes => {
                        let base = ports.div_ceil(ports_per_box);
                        if input.redundancy { base * 2 } else { base }
                    }
                    RedundancyRule::DoublePorts => ports_final.div_ceil(ports_per_box),
                };
                let by_boxes = boxes.div_ceil(boxes_per_processor);
                (by_boxes.max(by_pixels), boxes, Some(box_name))
            }
            Effective::Direct { ports_per_processor } => {
                let by_ports = ports_final.div_ceil(ports_per_processor);
                (by_ports.max(by_pixels), 0, None)
            }
        };

    processor_count = processor_count.max(1);
    if input.processor_redundancy {
        processor_count *= 2;
    }

    EquipmentPlan {
        processor_count,
        distribution_box_count,
        distribution_box_name,
        soca_group_count: input.circuit_count.div_ceil(CIRCUITS_PER_SOCA),
        ports_needed: ports,
        ports_needed_final: ports_final,
    }
}

enum Effective {
    Distributed {
        ports_per_box: u32,
        boxes_per_processor: u32,
        box_name: String,
        redundancy: RedundancyRule,
    },
    Direct {
        ports_per_processor: u32,
    },
}

fn effective_topology(topology: &PortTopology, mode: ConnectionMode) -> Effective {
    match topology {
        PortTopology::Distributed {
            ports_per_box,
            boxes_per_processor,
            box_name,
            redundancy,
        } => Effective::Distributed {
            ports_per_box: (*ports_per_box).max(1),
            boxes_per_processor: (*boxes_per_processor).max(1),
            box_name: box_name.clone(),
            redundancy: *redundancy,
        },
        PortTopology::Direct { ports_per_processor } => Effective::Direct {
            ports_per_processor: (*ports_per_processor).max(1),
        },
        PortTopology::Switchable {
            direct_ports,
            ports_per_box,
            boxes_per_processor,
            box_name,
        } => match mode {
            ConnectionMode::Direct => Effective::Direct {
                ports_per_processor: (*direct_ports).max(1),
            },
            ConnectionMode::Distributed => Effective::Distributed {
                ports_per_box: (*ports_per_box).max(1),
                boxes_per_processor: (*boxes_per_processor).max(1),
                box_name: box_name.clone(),
                redundancy: RedundancyRule::DoublePorts,
            },
        },
    }
}

fn div_ceil_u64(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    numerator.div_ceil(denominator) as u32
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use wallplan_core::Catalog;

    fn spec(id: &str) -> ProcessorSpec {
        Catalog::builtin().processor(id).unwrap().clone()
    }

    fn input(data_line_count: u32, total_pixels: u64) -> SizingInput {
        SizingInput {
            data_line_count,
            circuit_count: 0,
            total_pixels,
            redundancy: false,
            processor_redundancy: false,
            connection_mode: ConnectionMode::Direct,
        }
    }

    #[test]
    fn redundancy_doubles_boxes_but_not_ports() {
        // 10 lines on 10-port boxes: 1 box, 2 under redundancy -- while the
        // port requirement itself stays at 10.
        let sx40 = spec("Brompton_SX40");
        let plain = size_equipment(&sx40, &input(10, 1_000_000));
        assert_eq!(plain.distribution_box_count, 1);
        assert_eq!(plain.ports_needed, 10);

        let mut redundant_input = input(10, 1_000_000);
        redundant_input.redundancy = true;
        let redundant = size_equipment(&sx40, &redundant_input);
        assert_eq!(redundant.distribution_box_count, 2);
        assert_eq!(redundant.ports_needed, 10);
        assert_eq!(redundant.ports_needed_final, 20);

        // And 11 lines across two boxes doubles to four.
        let mut wide = input(11, 1_000_000);
        let wide_plain = size_equipment(&sx40, &wide);
        assert_eq!(wide_plain.distribution_box_count, 2);
        wide.redundancy = true;
        let wide_redundant = size_equipment(&sx40, &wide);
        assert_eq!(wide_redundant.distribution_box_count, 4);
    }

    #[test]
    fn processors_are_sized_by_the_binding_constraint() {
        let sx40 = spec("Brompton_SX40");
        // Box-driven: 30 lines -> 3 boxes -> 1 processor by boxes, but only
        // 1M pixels. Boxes bind.
        let plan = size_equipment(&sx40, &input(30, 1_000_000));
        assert_eq!(plan.distribution_box_count, 3);
        assert_eq!(plan.processor_count, 1);
        // Pixel-driven: 19M pixels need 3 processors regardless of ports.
        let plan = size_equipment(&sx40, &input(10, 19_000_000));
        assert_eq!(plan.processor_count, 3);
    }

    #[test]
    fn direct_topology_sizes_from_ports_and_pixels() {
        let s8 = spec("Brompton_S8");
        // 9 lines on 8 ports -> 2 processors.
        let plan = size_equipment(&s8, &input(9, 1_000_000));
        assert_eq!(plan.processor_count, 2);
        assert_eq!(plan.distribution_box_count, 0);
        // Redundancy doubles the port requirement on direct vendors.
        let mut redundant = input(5, 1_000_000);
        redundant.redundancy = true;
        let plan = size_equipment(&s8, &redundant);
        assert_eq!(plan.ports_needed_final, 10);
        assert_eq!(plan.processor_count, 2);
    }

    #[test]
    fn switchable_topology_follows_the_connection_mode() {
        let mx40 = spec("NovaStar_MX40_Pro");
        // Direct: 30 lines doubled to 60 on 20 ports -> 3 processors.
        let mut direct = input(30, 1_000_000);
        direct.redundancy = true;
        let plan = size_equipment(&mx40, &direct);
        assert_eq!(plan.processor_count, 3);
        assert_eq!(plan.distribution_box_count, 0);

        // Distributed: 60 final ports on 10-port boxes -> 6 boxes; 4 boxes
        // per processor -> 2 processors.
        let mut indirect = direct;
        indirect.connection_mode = ConnectionMode::Distributed;
        let plan = size_equipment(&mx40, &indirect);
        assert_eq!(plan.distribution_box_count, 6);
        assert_eq!(plan.processor_count, 2);
        assert_eq!(
            plan.distribution_box_name.as_deref(),
            Some("NovaStar CVT-10 Pro")
        );
    }

    #[test]
    fn processor_redundancy_doubles_the_final_count() {
        let s4 = spec("Brompton_S4");
        let mut with_failover = input(3, 1_000_000);
        with_failover.processor_redundancy = true;
        let plan = size_equipment(&s4, &with_failover);
        assert_eq!(plan.processor_count, 2);
    }

    #[test]
    fn soca_groups_are_six_circuits_each() {
        let sx40 = spec("Brompton_SX40");
        let mut sized = input(1, 1_000_000);
        sized.circuit_count = 13;
        let plan = size_equipment(&sx40, &sized);
        assert_eq!(plan.soca_group_count, 3);
        sized.circuit_count = 12;
        assert_eq!(size_equipment(&sx40, &sized).soca_group_count, 2);
    }

    #[test]
    fn empty_wall_sizes_to_zero() {
        let sx40 = spec("Brompton_SX40");
        let plan = size_equipment(&sx40, &input(0, 0));
        assert_eq!(plan, EquipmentPlan::default());
    }

    #[test]
    fn plan_serde_round_trip() {
        let sx40 = spec("Brompton_SX40");
        let plan = size_equipment(&sx40, &input(10, 1_000_000));
        let json = serde_json::to_string(&plan).unwrap();
        let back: EquipmentPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
