//! Property tests for equipment sizing across the built-in processors.

use proptest::prelude::*;
use wallplan_core::{Catalog, ConnectionMode};
use wallplan_gear::{size_equipment, SizingInput};

fn processor_ids() -> Vec<String> {
    Catalog::builtin()
        .processor_ids()
        .map(str::to_string)
        .collect()
}

proptest! {
    /// Adding lines or pixels never shrinks the plan.
    #[test]
    fn sizing_is_monotone(
        proc_index in 0usize..7,
        lines in 0u32..200,
        extra_lines in 0u32..50,
        pixels in 0u64..40_000_000,
    ) {
        let ids = processor_ids();
        let catalog = Catalog::builtin();
        let spec = catalog.processor(&ids[proc_index % ids.len()]).unwrap();
        let base = SizingInput {
            data_line_count: lines,
            circuit_count: 0,
            total_pixels: pixels,
            redundancy: false,
            processor_redundancy: false,
            connection_mode: ConnectionMode::Direct,
        };
        let mut bigger = base;
        bigger.data_line_count += extra_lines;
        let small = size_equipment(spec, &base);
        let large = size_equipment(spec, &bigger);
        prop_assert!(large.processor_count >= small.processor_count);
        prop_assert!(large.distribution_box_count >= small.distribution_box_count);
    }

    /// Redundancy never reduces distribution hardware and never changes the
    /// pre-redundancy port requirement.
    #[test]
    fn redundancy_only_adds_hardware(
        proc_index in 0usize..7,
        lines in 1u32..200,
        pixels in 1u64..40_000_000,
        distributed in proptest::bool::ANY,
    ) {
        let ids = processor_ids();
        let catalog = Catalog::builtin();
        let spec = catalog.processor(&ids[proc_index % ids.len()]).unwrap();
        let mode = if distributed {
            ConnectionMode::Distributed
        } else {
            ConnectionMode::Direct
        };
        let plain = SizingInput {
            data_line_count: lines,
            circuit_count: 0,
            total_pixels: pixels,
            redundancy: false,
            processor_redundancy: false,
            connection_mode: mode,
        };
        let mut redundant = plain;
        redundant.redundancy = true;
        let a = size_equipment(spec, &plain);
        let b = size_equipment(spec, &redundant);
        prop_assert_eq!(a.ports_needed, b.ports_needed);
        prop_assert!(b.distribution_box_count >= a.distribution_box_count);
        prop_assert!(b.ports_needed_final >= a.ports_needed_final);
    }
}
