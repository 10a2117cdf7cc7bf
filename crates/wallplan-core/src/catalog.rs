//! Panel and processor hardware catalog.
//!
//! Built-in entries cover the reference hardware families; user-defined
//! models can be registered alongside them. Spec fields that a vendor has
//! not yet confirmed are `None`; computation against such a model fails with
//! [`PlanError::IncompleteSpecs`] rather than producing garbage counts.

use crate::error::PlanError;
use crate::units::meters_to_feet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An LED panel model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Manufacturer name.
    pub brand: String,
    /// Marketing model name.
    pub name: String,
    /// Panel width in meters.
    pub width_m: Option<f64>,
    /// Panel height in meters.
    pub height_m: Option<f64>,
    /// Horizontal pixel count.
    pub res_x: Option<u32>,
    /// Vertical pixel count.
    pub res_y: Option<u32>,
    /// Maximum power draw in watts.
    pub power_max_w: Option<f64>,
    /// Average power draw in watts. Defaults to half of max when absent.
    pub power_avg_w: Option<f64>,
    /// Whether data/power jumpers are built into the panel frame.
    pub jumpers_builtin: bool,
    /// Catalog id of the half-height companion model, for walls finished
    /// with a fractional trailing row.
    pub half_row_companion: Option<String>,
}

impl PanelSpec {
    /// Validate that every computation-critical field is present.
    pub fn resolve(&self, id: &str) -> Result<ResolvedPanel, PlanError> {
        let mut missing = Vec::new();
        if self.width_m.is_none() {
            missing.push("width_m");
        }
        if self.height_m.is_none() {
            missing.push("height_m");
        }
        if self.res_x.is_none() {
            missing.push("res_x");
        }
        if self.res_y.is_none() {
            missing.push("res_y");
        }
        if self.power_max_w.is_none() {
            missing.push("power_max_w");
        }
        if !missing.is_empty() {
            return Err(PlanError::IncompleteSpecs {
                model: id.to_string(),
                missing,
            });
        }
        let width_m = self.width_m.unwrap_or_default();
        let height_m = self.height_m.unwrap_or_default();
        let res_x = self.res_x.unwrap_or_default();
        let res_y = self.res_y.unwrap_or_default();
        let power_max_w = self.power_max_w.unwrap_or_default();
        Ok(ResolvedPanel {
            id: id.to_string(),
            width_ft: meters_to_feet(width_m),
            height_ft: meters_to_feet(height_m),
            res_x,
            res_y,
            pixels: res_x as u64 * res_y as u64,
            power_max_w,
            power_avg_w: self.power_avg_w.unwrap_or(power_max_w * 0.5),
            jumpers_builtin: self.jumpers_builtin,
            half_row_companion: self.half_row_companion.clone(),
        })
    }
}

/// A panel model with every computation-critical field present, dimensions
/// pre-converted to feet.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPanel {
    pub id: String,
    pub width_ft: f64,
    pub height_ft: f64,
    pub res_x: u32,
    pub res_y: u32,
    pub pixels: u64,
    pub power_max_w: f64,
    pub power_avg_w: f64,
    pub jumpers_builtin: bool,
    pub half_row_companion: Option<String>,
}

/// How a redundancy toggle maps onto distribution hardware.
///
/// A distribution box serves either primary or backup lines, never both, so
/// some vendors duplicate boxes outright; others express redundancy as a
/// doubled port requirement fed into the same box arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedundancyRule {
    /// Compute boxes from primary ports, then double the box count.
    DoubleBoxes,
    /// Double the port requirement before computing boxes.
    DoublePorts,
}

/// How a processor's output ports reach the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PortTopology {
    /// Panels connect through an intermediate distribution box.
    Distributed {
        ports_per_box: u32,
        boxes_per_processor: u32,
        box_name: String,
        redundancy: RedundancyRule,
    },
    /// Panels connect straight to processor ports.
    Direct { ports_per_processor: u32 },
    /// Either mode, selected per wall at plan time.
    Switchable {
        direct_ports: u32,
        ports_per_box: u32,
        boxes_per_processor: u32,
        box_name: String,
    },
}

/// Per-wall selection for [`PortTopology::Switchable`] processors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionMode {
    /// Processor ports feed the wall directly.
    #[default]
    Direct,
    /// Lines fan out from distribution boxes.
    Distributed,
}

/// A video processor model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorSpec {
    /// Marketing model name.
    pub name: String,
    /// Pixel capacity of one 1G output at the reference frame rate and bit
    /// depth.
    pub base_pixels_1g: u64,
    /// Reference frame rate in Hz.
    pub base_framerate: u32,
    /// Reference bit depth.
    pub base_bitdepth: u32,
    /// Exact measured 1G capacity per bit depth, for processors whose
    /// datasheet publishes the table. Overrides the scaled estimate.
    pub pixels_1g_by_bitdepth: Option<BTreeMap<u32, u64>>,
    /// Total pixel ceiling of one processor.
    pub total_pixels: u64,
    /// Output port topology.
    pub topology: PortTopology,
}

/// The hardware catalog: panel and processor models by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    panels: BTreeMap<String, PanelSpec>,
    processors: BTreeMap<String, ProcessorSpec>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of built-in hardware models.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (id, spec) in builtin_panels() {
            catalog.panels.insert(id.to_string(), spec);
        }
        for (id, spec) in builtin_processors() {
            catalog.processors.insert(id.to_string(), spec);
        }
        catalog
    }

    /// Register or replace a panel model.
    pub fn insert_panel(&mut self, id: impl Into<String>, spec: PanelSpec) {
        self.panels.insert(id.into(), spec);
    }

    /// Register or replace a processor model.
    pub fn insert_processor(&mut self, id: impl Into<String>, spec: ProcessorSpec) {
        self.processors.insert(id.into(), spec);
    }

    /// Look up a panel model.
    pub fn panel(&self, id: &str) -> Result<&PanelSpec, PlanError> {
        self.panels
            .get(id)
            .ok_or_else(|| PlanError::UnknownPanel { id: id.to_string() })
    }

    /// Look up and validate a panel model.
    pub fn resolved_panel(&self, id: &str) -> Result<ResolvedPanel, PlanError> {
        self.panel(id)?.resolve(id)
    }

    /// Look up a processor model.
    pub fn processor(&self, id: &str) -> Result<&ProcessorSpec, PlanError> {
        self.processors
            .get(id)
            .ok_or_else(|| PlanError::UnknownProcessor { id: id.to_string() })
    }

    /// Iterate panel ids in sorted order.
    pub fn panel_ids(&self) -> impl Iterator<Item = &str> {
        self.panels.keys().map(String::as_str)
    }

    /// Iterate processor ids in sorted order.
    pub fn processor_ids(&self) -> impl Iterator<Item = &str> {
        self.processors.keys().map(String::as_str)
    }
}

fn panel(
    brand: &str,
    name: &str,
    width_m: f64,
    height_m: f64,
    res: (u32, u32),
    power: (f64, f64),
    jumpers_builtin: bool,
) -> PanelSpec {
    PanelSpec {
        brand: brand.to_string(),
        name: name.to_string(),
        width_m: Some(width_m),
        height_m: Some(height_m),
        res_x: Some(res.0),
        res_y: Some(res.1),
        power_max_w: Some(power.0),
        power_avg_w: Some(power.1),
        jumpers_builtin,
        half_row_companion: None,
    }
}

fn builtin_panels() -> Vec<(&'static str, PanelSpec)> {
    let mut cb5 = panel(
        "ROE Visual",
        "Carbon CB5 MKII",
        0.6,
        1.2,
        (104, 208),
        (480.0, 240.0),
        true,
    );
    cb5.half_row_companion = Some("CB5_MKII_HALF".to_string());

    vec![
        (
            "BP2_V2",
            panel(
                "ROE Visual",
                "Black Pearl BP2 V2",
                0.5,
                0.5,
                (176, 176),
                (190.0, 95.0),
                false,
            ),
        ),
        ("CB5_MKII", cb5),
        (
            "CB5_MKII_HALF",
            panel(
                "ROE Visual",
                "Carbon CB5 MKII Half Panel",
                0.6,
                0.6,
                (104, 104),
                (250.0, 125.0),
                true,
            ),
        ),
        (
            "MC7H",
            panel(
                "ROE Visual",
                "MC7H",
                0.6,
                0.6,
                (80, 80),
                (420.0, 210.0),
                true,
            ),
        ),
        (
            "BO3",
            panel(
                "ROE Visual",
                "Black Onyx BO3",
                0.5,
                0.5,
                (144, 144),
                (170.0, 85.0),
                false,
            ),
        ),
        (
            "BM4_MATTE",
            panel(
                "ROE Visual",
                "Black Marble BM4 (Matte)",
                0.61,
                0.61,
                (128, 128),
                (280.0, 140.0),
                false,
            ),
        ),
        (
            "DM2_6",
            panel(
                "ROE Visual",
                "DM2.6",
                0.5,
                0.5,
                (192, 192),
                (180.0, 90.0),
                false,
            ),
        ),
        (
            "INFILED_AMT8_3",
            panel(
                "INFiLED",
                "AMT 8.3",
                1.0,
                1.0,
                (120, 120),
                (720.0, 360.0),
                false,
            ),
        ),
    ]
}

fn processor(
    name: &str,
    base_pixels_1g: u64,
    total_pixels: u64,
    topology: PortTopology,
) -> ProcessorSpec {
    ProcessorSpec {
        name: name.to_string(),
        base_pixels_1g,
        base_framerate: 60,
        base_bitdepth: 8,
        pixels_1g_by_bitdepth: None,
        total_pixels,
        topology,
    }
}

fn builtin_processors() -> Vec<(&'static str, ProcessorSpec)> {
    let mut mx40 = processor(
        "NovaStar MX40 Pro",
        659_722,
        9_000_000,
        PortTopology::Switchable {
            direct_ports: 20,
            ports_per_box: 10,
            boxes_per_processor: 4,
            box_name: "NovaStar CVT-10 Pro".to_string(),
        },
    );
    mx40.pixels_1g_by_bitdepth = Some(BTreeMap::from([
        (8, 659_722),
        (10, 494_792),
        (12, 329_861),
    ]));

    vec![
        (
            "Brompton_SX40",
            processor(
                "Brompton SX40",
                525_000,
                9_000_000,
                PortTopology::Distributed {
                    ports_per_box: 10,
                    boxes_per_processor: 4,
                    box_name: "Brompton XD".to_string(),
                    redundancy: RedundancyRule::DoubleBoxes,
                },
            ),
        ),
        (
            "Brompton_S8",
            processor(
                "Brompton S8",
                525_000,
                4_500_000,
                PortTopology::Direct {
                    ports_per_processor: 8,
                },
            ),
        ),
        (
            "Brompton_M2",
            processor(
                "Brompton M2",
                500_000,
                2_000_000,
                PortTopology::Direct {
                    ports_per_processor: 4,
                },
            ),
        ),
        (
            "Brompton_S4",
            processor(
                "Brompton S4",
                525_000,
                2_070_000,
                PortTopology::Direct {
                    ports_per_processor: 4,
                },
            ),
        ),
        (
            "Brompton_T1",
            processor(
                "Brompton T1",
                525_000,
                525_000,
                PortTopology::Direct {
                    ports_per_processor: 1,
                },
            ),
        ),
        (
            "Brompton_SQ200",
            processor(
                "Brompton SQ200",
                525_000,
                36_000_000,
                PortTopology::Direct {
                    ports_per_processor: 8,
                },
            ),
        ),
        ("NovaStar_MX40_Pro", mx40),
    ]
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_resolves_every_panel() {
        let catalog = Catalog::builtin();
        for id in catalog.panel_ids().map(str::to_string).collect::<Vec<_>>() {
            let resolved = catalog.resolved_panel(&id).unwrap();
            assert!(resolved.pixels > 0, "{id} has no pixels");
            assert!(resolved.width_ft > 0.0);
        }
    }

    #[test]
    fn incomplete_custom_panel_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.insert_panel(
            "CUSTOM_TBD",
            PanelSpec {
                brand: "Acme".into(),
                name: "Prototype".into(),
                width_m: Some(0.5),
                height_m: None,
                res_x: Some(128),
                res_y: Some(128),
                power_max_w: None,
                power_avg_w: None,
                jumpers_builtin: false,
                half_row_companion: None,
            },
        );
        let err = catalog.resolved_panel("CUSTOM_TBD").unwrap_err();
        match err {
            PlanError::IncompleteSpecs { model, missing } => {
                assert_eq!(model, "CUSTOM_TBD");
                assert_eq!(missing, vec!["height_m", "power_max_w"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unknown_ids_are_reported() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.panel("NOPE"),
            Err(PlanError::UnknownPanel { .. })
        ));
        assert!(matches!(
            catalog.processor("NOPE"),
            Err(PlanError::UnknownProcessor { .. })
        ));
    }

    #[test]
    fn avg_power_defaults_to_half_max() {
        let spec = PanelSpec {
            brand: "Acme".into(),
            name: "NoAvg".into(),
            width_m: Some(0.5),
            height_m: Some(0.5),
            res_x: Some(100),
            res_y: Some(100),
            power_max_w: Some(200.0),
            power_avg_w: None,
            jumpers_builtin: false,
            half_row_companion: None,
        };
        let resolved = spec.resolve("NoAvg").unwrap();
        assert_eq!(resolved.power_avg_w, 100.0);
    }

    #[test]
    fn half_row_companion_links_to_catalog_entry() {
        let catalog = Catalog::builtin();
        let cb5 = catalog.resolved_panel("CB5_MKII").unwrap();
        let companion = cb5.half_row_companion.as_deref().unwrap();
        assert!(catalog.resolved_panel(companion).is_ok());
    }
}
