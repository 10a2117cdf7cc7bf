//! Cable runs, media, and the standard-length procurement ladder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stocked cable lengths in feet. Runs longer than the ladder round up to
/// the next 50 ft multiple.
pub const STANDARD_LENGTHS_FT: [u32; 8] = [25, 50, 75, 100, 150, 200, 250, 300];

/// Trunk runs longer than this need fiber instead of copper.
pub const FIBER_TRUNK_THRESHOLD_FT: f64 = 200.0;

/// Server feeds longer than this leave SDI for fiber.
pub const SDI_SERVER_LIMIT_FT: f64 = 300.0;

/// What a cable run is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CableClass {
    /// SOCA feed from the distro to a power-origin group.
    Power,
    /// Primary data feed from processor or dist box to a line's entry panel.
    DataPrimary,
    /// Backup data feed to a line's exit panel under redundancy.
    DataBackup,
    /// Processor to on-wall distribution box.
    Trunk,
    /// Jumper bridging a knockout gap inside one data line.
    Bridge,
    /// Media server to processor.
    Server,
}

/// Physical cable medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CableMedia {
    Soca,
    Cat6,
    Fiber,
    Sdi,
}

/// One physical cable run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableRun {
    /// What the run is for.
    pub class: CableClass,
    /// Medium to stock.
    pub media: CableMedia,
    /// 0-based line / SOCA / box index the run serves, where applicable.
    pub line: Option<u32>,
    /// Exact required length in feet, to one decimal.
    pub length_ft: f64,
    /// Stocked length to procure; always `>= length_ft`.
    pub rounded_ft: u32,
}

impl CableRun {
    /// Build a run, rounding the length onto the standard ladder.
    #[must_use]
    pub fn new(class: CableClass, media: CableMedia, line: Option<u32>, length_ft: f64) -> Self {
        Self {
            class,
            media,
            line,
            length_ft: (length_ft * 10.0).round() / 10.0,
            rounded_ft: round_up_to_standard(length_ft),
        }
    }
}

/// Round a required length up to the nearest stocked cable length.
///
/// Never rounds down and is idempotent: `round(x) >= x` and
/// `round(round(x)) == round(x)`.
#[must_use]
pub fn round_up_to_standard(length_ft: f64) -> u32 {
    for &standard in &STANDARD_LENGTHS_FT {
        if length_ft <= f64::from(standard) {
            return standard;
        }
    }
    let fifties = (length_ft / 50.0).ceil() as u32;
    fifties * 50
}

/// The server-to-processor run: SDI up to the SDI limit, fiber beyond.
///
/// Fiber lengths are stocked in 100 ft increments with a 500 ft minimum.
#[must_use]
pub fn server_run(length_ft: f64) -> CableRun {
    if length_ft > SDI_SERVER_LIMIT_FT {
        let hundreds = (length_ft / 100.0).ceil() as u32 * 100;
        CableRun {
            class: CableClass::Server,
            media: CableMedia::Fiber,
            line: None,
            length_ft: (length_ft * 10.0).round() / 10.0,
            rounded_ft: hundreds.max(500),
        }
    } else {
        CableRun::new(CableClass::Server, CableMedia::Sdi, None, length_ft)
    }
}

/// The ordered list of cable runs for one wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CableManifest {
    /// Runs ordered by class, then by index.
    pub runs: Vec<CableRun>,
}

impl CableManifest {
    /// Runs of one class.
    pub fn of_class(&self, class: CableClass) -> impl Iterator<Item = &CableRun> {
        self.runs.iter().filter(move |run| run.class == class)
    }

    /// Number of runs of one class.
    pub fn count(&self, class: CableClass) -> usize {
        self.of_class(class).count()
    }

    /// Procurement totals for one class: stocked length to run count.
    pub fn totals(&self, class: CableClass) -> BTreeMap<u32, u32> {
        let mut totals = BTreeMap::new();
        for run in self.of_class(class) {
            *totals.entry(run.rounded_ft).or_insert(0) += 1;
        }
        totals
    }

    /// Procurement totals for one medium across all classes.
    pub fn totals_by_media(&self, media: CableMedia) -> BTreeMap<u32, u32> {
        let mut totals = BTreeMap::new();
        for run in self.runs.iter().filter(|run| run.media == media) {
            *totals.entry(run.rounded_ft).or_insert(0) += 1;
        }
        totals
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_rounds_up_to_the_next_standard() {
        assert_eq!(round_up_to_standard(0.0), 25);
        assert_eq!(round_up_to_standard(24.9), 25);
        assert_eq!(round_up_to_standard(25.0), 25);
        assert_eq!(round_up_to_standard(25.1), 50);
        assert_eq!(round_up_to_standard(99.0), 100);
        assert_eq!(round_up_to_standard(101.0), 150);
        assert_eq!(round_up_to_standard(299.0), 300);
    }

    #[test]
    fn beyond_ladder_rounds_to_fifty_foot_multiples() {
        assert_eq!(round_up_to_standard(301.0), 350);
        assert_eq!(round_up_to_standard(350.0), 350);
        assert_eq!(round_up_to_standard(420.0), 450);
    }

    #[test]
    fn rounding_is_idempotent() {
        for raw in [0.0, 17.3, 25.0, 77.7, 300.0, 312.0, 490.0] {
            let once = round_up_to_standard(raw);
            let twice = round_up_to_standard(f64::from(once));
            assert_eq!(once, twice);
            assert!(f64::from(once) >= raw);
        }
    }

    #[test]
    fn server_run_switches_to_fiber_past_the_sdi_limit() {
        let sdi = server_run(120.0);
        assert_eq!(sdi.media, CableMedia::Sdi);
        assert_eq!(sdi.rounded_ft, 150);

        let fiber = server_run(310.0);
        assert_eq!(fiber.media, CableMedia::Fiber);
        assert_eq!(fiber.rounded_ft, 500);

        let long_fiber = server_run(740.0);
        assert_eq!(long_fiber.rounded_ft, 800);
    }

    #[test]
    fn run_lengths_are_recorded_to_one_decimal() {
        let run = CableRun::new(CableClass::Power, CableMedia::Soca, Some(0), 37.268);
        assert_eq!(run.length_ft, 37.3);
        assert_eq!(run.rounded_ft, 50);
    }

    #[test]
    fn totals_group_by_stocked_length() {
        let manifest = CableManifest {
            runs: vec![
                CableRun::new(CableClass::DataPrimary, CableMedia::Cat6, Some(0), 40.0),
                CableRun::new(CableClass::DataPrimary, CableMedia::Cat6, Some(1), 45.0),
                CableRun::new(CableClass::DataPrimary, CableMedia::Cat6, Some(2), 60.0),
                CableRun::new(CableClass::Power, CableMedia::Soca, Some(0), 40.0),
            ],
        };
        let totals = manifest.totals(CableClass::DataPrimary);
        assert_eq!(totals.get(&50), Some(&2));
        assert_eq!(totals.get(&75), Some(&1));
        assert_eq!(manifest.count(CableClass::Power), 1);
    }
}
