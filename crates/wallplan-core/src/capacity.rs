//! Capacity limits: panels per data line and panels per circuit.
//!
//! Data-side capacity starts from a processor's 1G pixel capacity at its
//! reference frame rate and bit depth and scales *down* for faster frame
//! rates and deeper bit depths, never up. Power-side capacity comes from the
//! circuit wattage budget. Both clamp to a minimum of 1 (a wall with panels
//! always needs at least one line) and both yield to an explicit positive
//! user override.

use crate::catalog::ProcessorSpec;
use serde::{Deserialize, Serialize};

/// Hard port limit of the reference hardware family: no more than 500
/// panels on one data line regardless of pixel math.
pub const MAX_PANELS_PER_LINE: u32 = 500;

/// Circuits per SOCA power-origin group, by hardware convention.
pub const CIRCUITS_PER_SOCA: u32 = 6;

/// Which power figure drives circuit capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerProfile {
    /// Size against maximum draw.
    #[default]
    Max,
    /// Size against average draw.
    Average,
}

/// Resolved per-line and per-circuit panel limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityLimits {
    /// Maximum panels on one data line, `>= 1`.
    pub panels_per_data_line: u32,
    /// Maximum panels on one circuit, `>= 1`.
    pub panels_per_circuit: u32,
}

/// The panel population a data line capacity is computed against.
///
/// A wall finished with a fractional trailing row mixes two pixel densities;
/// capacity then divides by the weighted average pixels per panel across the
/// mix, not either sub-type alone. This shifts line counts by one around
/// capacity boundaries and must be reproduced exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMix {
    /// Live full-size panels.
    pub full_count: u32,
    /// Pixels per full-size panel.
    pub full_pixels: u64,
    /// Half-row panels (zero when the wall has no trailing half row).
    pub half_count: u32,
    /// Pixels per half-row panel.
    pub half_pixels: u64,
}

impl PanelMix {
    /// A single-model wall.
    pub const fn uniform(count: u32, pixels_per_panel: u64) -> Self {
        Self {
            full_count: count,
            full_pixels: pixels_per_panel,
            half_count: 0,
            half_pixels: 0,
        }
    }

    /// Total panels in the mix.
    pub const fn total_panels(&self) -> u32 {
        self.full_count + self.half_count
    }

    /// Total pixels in the mix.
    pub const fn total_pixels(&self) -> u64 {
        self.full_count as u64 * self.full_pixels + self.half_count as u64 * self.half_pixels
    }

    /// Weighted average pixels per panel. Falls back to the full-panel pixel
    /// count for an empty mix.
    pub fn average_pixels(&self) -> f64 {
        let total = self.total_panels();
        if total == 0 {
            return self.full_pixels as f64;
        }
        self.total_pixels() as f64 / total as f64
    }
}

/// Pixel capacity of one 1G port at the requested frame rate and bit depth.
///
/// Processors that publish an exact per-bit-depth table use the table value
/// (already bit-depth corrected) scaled only by frame rate; everything else
/// scales the reference capacity by `base_framerate / frame_rate` and
/// `base_bitdepth / bit_depth`, only when the request exceeds the reference.
#[must_use]
pub fn adjusted_pixel_capacity(processor: &ProcessorSpec, frame_rate: u32, bit_depth: u32) -> u64 {
    let frame_scale = if frame_rate > processor.base_framerate && frame_rate > 0 {
        processor.base_framerate as f64 / frame_rate as f64
    } else {
        1.0
    };

    if let Some(table) = &processor.pixels_1g_by_bitdepth {
        if let Some(&exact) = table.get(&bit_depth) {
            return (exact as f64 * frame_scale) as u64;
        }
    }

    let depth_scale = if bit_depth > processor.base_bitdepth {
        processor.base_bitdepth as f64 / bit_depth as f64
    } else {
        1.0
    };
    (processor.base_pixels_1g as f64 * frame_scale * depth_scale) as u64
}

/// Panels per data line for a processor driving the given panel mix.
///
/// A positive `user_override` replaces the computed value outright.
#[must_use]
pub fn panels_per_data_line(
    processor: &ProcessorSpec,
    frame_rate: u32,
    bit_depth: u32,
    mix: &PanelMix,
    user_override: Option<u32>,
) -> u32 {
    if let Some(n) = user_override.filter(|n| *n > 0) {
        return n;
    }
    let capacity = adjusted_pixel_capacity(processor, frame_rate, bit_depth);
    let average = mix.average_pixels();
    if average <= 0.0 {
        crate::debug!("panel mix has zero pixel density, clamping data line capacity to 1");
        return 1;
    }
    let computed = (capacity as f64 / average) as u32;
    if computed == 0 {
        crate::debug!(
            capacity,
            average,
            "pixel capacity below one panel, clamping data line capacity to 1"
        );
    }
    computed.clamp(1, MAX_PANELS_PER_LINE)
}

/// Panels per circuit for the given supply and per-panel draw.
///
/// A panel that draws more than one breaker supports still gets a capacity
/// of 1 (the silent clamp from the error taxonomy). A positive
/// `user_override` replaces the computed value outright.
#[must_use]
pub fn panels_per_circuit(
    voltage: f64,
    breaker_amps: f64,
    per_panel_watts: f64,
    user_override: Option<u32>,
) -> u32 {
    if let Some(n) = user_override.filter(|n| *n > 0) {
        return n;
    }
    let budget = voltage * breaker_amps;
    if per_panel_watts <= 0.0 {
        return 1;
    }
    let computed = (budget / per_panel_watts) as u32;
    if computed == 0 {
        crate::debug!(
            budget,
            per_panel_watts,
            "panel draw exceeds circuit budget, clamping circuit capacity to 1"
        );
    }
    computed.max(1)
}

// =========================================================================
// Tests
// =========================================================================
