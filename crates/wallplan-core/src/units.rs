//! Length unit conversions.
//!
//! Hardware catalogs specify panel dimensions in meters; cable geometry and
//! procurement work in feet. Display-side unit preference is a presentation
//! concern outside this engine.

/// Meters to feet.
pub const M_TO_FT: f64 = 3.28084;

/// Convert meters to feet.
#[inline]
#[must_use]
pub fn meters_to_feet(m: f64) -> f64 {
    m * M_TO_FT
}

/// Convert feet to meters.
#[inline]
#[must_use]
pub fn feet_to_meters(ft: f64) -> f64 {
    ft / M_TO_FT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_tolerance() {
        let ft = meters_to_feet(0.5);
        assert!((ft - 1.64042).abs() < 1e-9);
        assert!((feet_to_meters(ft) - 0.5).abs() < 1e-12);
    }
}
