//! Built-in regions, crops and flood-duration multipliers.

use super::profile::{CropCalendar, CropDamageProfile, CropGrowthStage, DamageCurvePoint};
use super::region::FloodRegionProfile;
use hydroecon_core::math::interpolators::interpolate_clamped;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Flood depths (ft) reported in damage tables.
pub const STANDARD_DEPTHS: [f64; 6] = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0];

/// Flood durations (days) reported in damage tables.
pub const STANDARD_DURATIONS: [i32; 4] = [1, 3, 7, 14];

const DURATION_MULTIPLIERS: [f64; 4] = [0.35, 0.65, 1.0, 1.18];

static GLOBAL: OnceLock<AgriculturalDamageLibrary> = OnceLock::new();

/// Read-only catalogue of flood regions and crop damage profiles.
///
/// The process-wide instance from [`AgriculturalDamageLibrary::global`] is
/// built on first use and shared by reference afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AgriculturalDamageLibrary {
    regions: Vec<FloodRegionProfile>,
    crops: Vec<CropDamageProfile>,
    duration_multipliers: BTreeMap<i32, f64>,
}

impl AgriculturalDamageLibrary {
    /// Returns the shared built-in library.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::standard)
    }

    /// Builds a fresh copy of the built-in library.
    pub fn standard() -> Self {
        Self {
            regions: standard_regions(),
            crops: standard_crops(),
            duration_multipliers: STANDARD_DURATIONS
                .into_iter()
                .zip(DURATION_MULTIPLIERS)
                .collect(),
        }
    }

    /// All regions in catalogue order.
    pub fn regions(&self) -> &[FloodRegionProfile] {
        &self.regions
    }

    /// All crops in catalogue order.
    pub fn crops(&self) -> &[CropDamageProfile] {
        &self.crops
    }

    /// Looks up a region by exact name.
    pub fn region(&self, name: &str) -> Option<&FloodRegionProfile> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Looks up a crop by exact name.
    pub fn crop(&self, name: &str) -> Option<&CropDamageProfile> {
        self.crops.iter().find(|c| c.crop_name() == name)
    }

    /// Duration multipliers keyed by days.
    pub fn duration_multipliers(&self) -> &BTreeMap<i32, f64> {
        &self.duration_multipliers
    }

    /// Damage multiplier for a flood lasting `duration_days`.
    ///
    /// Standard durations return their tabulated value. Other durations are
    /// interpolated between the bracketing standard durations and clamped to
    /// the shortest/longest value outside the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use hydroecon_models::agriculture::AgriculturalDamageLibrary;
    ///
    /// let library = AgriculturalDamageLibrary::global();
    /// assert_eq!(library.duration_multiplier(7), 1.0);
    /// assert!((library.duration_multiplier(5) - 0.825).abs() < 1e-12);
    /// assert_eq!(library.duration_multiplier(30), 1.18);
    /// ```
    pub fn duration_multiplier(&self, duration_days: i32) -> f64 {
        if let Some(&value) = self.duration_multipliers.get(&duration_days) {
            return value;
        }

        let days: Vec<f64> = self.duration_multipliers.keys().map(|&d| f64::from(d)).collect();
        let values: Vec<f64> = self.duration_multipliers.values().copied().collect();
        interpolate_clamped(&days, &values, f64::from(duration_days), 0.0).unwrap_or(1.0)
    }
}

impl Default for AgriculturalDamageLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_regions() -> Vec<FloodRegionProfile> {
    vec![
        FloodRegionProfile::new(
            "Upper Midwest",
            "Represents snowmelt-driven flooding across the Missouri and Upper Mississippi basins.",
            (75, 120, 220),
            0,
            0.28,
        ),
        FloodRegionProfile::new(
            "Lower Mississippi & Gulf",
            "Captures early spring river flooding and tropical rainfall influences across the lower Mississippi Valley.",
            (45, 95, 190),
            -18,
            0.30,
        ),
        FloodRegionProfile::new(
            "Northern Plains",
            "Reflects later planting and prolonged runoff from plains snowmelt in the Dakotas and Montana.",
            (90, 135, 230),
            12,
            0.25,
        ),
        FloodRegionProfile::new(
            "Atlantic & Northeast",
            "Accounts for nor'easter rainfall and spring breakup flooding typical of the northeastern U.S.",
            (80, 125, 205),
            6,
            0.22,
        ),
        FloodRegionProfile::new(
            "Pacific & Interior West",
            "Combines snowmelt and convective flooding drivers for interior western agricultural valleys.",
            (70, 115, 200),
            -4,
            0.18,
        ),
    ]
}

/// Six-point depth/damage curve on the standard depths.
fn standard_curve(damages: [f64; 6]) -> Vec<DamageCurvePoint> {
    STANDARD_DEPTHS
        .into_iter()
        .zip(damages)
        .map(|(depth, damage)| DamageCurvePoint::new(depth, damage))
        .collect()
}

fn calendar(planting_start: i32, planting_end: i32, harvest_end: i32) -> CropCalendar {
    CropCalendar {
        planting_window_start_day: planting_start,
        planting_window_end_day: planting_end,
        harvest_end_day: harvest_end,
    }
}

fn standard_crops() -> Vec<CropDamageProfile> {
    vec![
        CropDamageProfile::new(
            "Corn (Grain)",
            "Agricultural Field - Corn (NASS 600)",
            950.0,
            calendar(110, 140, 280),
            vec![
                CropGrowthStage::new("Stand establishment", (0, 25), 0.35, 2.5),
                CropGrowthStage::new("Vegetative growth", (25, 70), 0.6, 3.0),
                CropGrowthStage::new("Silking & tassel", (70, 110), 1.0, 1.5),
                CropGrowthStage::new("Maturity & dry down", (110, 150), 0.45, 2.0),
            ],
            &standard_curve([5.0, 15.0, 35.0, 55.0, 75.0, 90.0]),
        )
        .with_description(
            "Assumes full-season field corn grown for grain with modern tillage and drainage practices.",
        ),
        CropDamageProfile::new(
            "Soybeans",
            "Agricultural Field - Soybeans (NASS 660)",
            750.0,
            calendar(125, 160, 285),
            vec![
                CropGrowthStage::new("Emergence & stand", (0, 25), 0.3, 2.0),
                CropGrowthStage::new("Vegetative nodes", (25, 65), 0.55, 3.0),
                CropGrowthStage::new("Flowering & pod set", (65, 105), 0.9, 1.8),
                CropGrowthStage::new("Seed fill", (105, 140), 0.6, 2.2),
            ],
            &standard_curve([4.0, 12.0, 32.0, 50.0, 68.0, 85.0]),
        )
        .with_description(
            "Standard maturity group III/IV soybeans drilled on 30-inch rows with conventional irrigation.",
        ),
        CropDamageProfile::new(
            "Spring Wheat",
            "Agricultural Field - Wheat (NASS 411)",
            600.0,
            calendar(105, 130, 250),
            vec![
                CropGrowthStage::new("Tillering", (0, 20), 0.4, 2.5),
                CropGrowthStage::new("Stem elongation", (20, 60), 0.6, 3.0),
                CropGrowthStage::new("Heading & bloom", (60, 95), 0.85, 1.7),
                CropGrowthStage::new("Grain fill", (95, 130), 0.5, 2.0),
            ],
            &standard_curve([3.0, 10.0, 28.0, 45.0, 63.0, 80.0]),
        )
        .with_description(
            "Represents hard red spring wheat planted after frost risk with standard fertility.",
        ),
        CropDamageProfile::new(
            "Cotton",
            "Agricultural Field - Cotton (NASS 390)",
            1200.0,
            calendar(110, 150, 300),
            vec![
                CropGrowthStage::new("Seeding & stand", (0, 25), 0.25, 3.2),
                CropGrowthStage::new("Vegetative", (25, 70), 0.6, 4.0),
                CropGrowthStage::new("Bloom & boll set", (70, 120), 0.95, 2.0),
                CropGrowthStage::new("Boll fill & open", (120, 170), 0.5, 2.5),
            ],
            &standard_curve([6.0, 18.0, 40.0, 60.0, 78.0, 92.0]),
        )
        .with_description(
            "Long-season upland cotton on row spacing common to the lower Mississippi Delta.",
        ),
        CropDamageProfile::new(
            "Rice",
            "Agricultural Field - Rice (NASS 310)",
            1400.0,
            calendar(95, 140, 270),
            vec![
                CropGrowthStage::new("Permanent flood establishment", (0, 30), 0.4, 4.5),
                CropGrowthStage::new("Tillering", (30, 80), 0.7, 5.0),
                CropGrowthStage::new("Panicle initiation & boot", (80, 120), 1.0, 3.0),
                CropGrowthStage::new("Grain fill & maturation", (120, 160), 0.6, 3.0),
            ],
            &standard_curve([8.0, 20.0, 45.0, 65.0, 82.0, 95.0]),
        )
        .with_description(
            "Mechanized paddy rice with managed flooding across the Gulf Coast and lower Mississippi.",
        ),
        CropDamageProfile::new(
            "Grain Sorghum",
            "Agricultural Field - Sorghum (NASS 650)",
            700.0,
            calendar(120, 150, 260),
            vec![
                CropGrowthStage::new("Stand establishment", (0, 25), 0.3, 3.0),
                CropGrowthStage::new("Vegetative", (25, 70), 0.55, 3.2),
                CropGrowthStage::new("Boot & bloom", (70, 110), 0.9, 1.8),
                CropGrowthStage::new("Grain fill", (110, 150), 0.5, 2.3),
            ],
            &standard_curve([4.0, 13.0, 30.0, 48.0, 65.0, 82.0]),
        )
        .with_description(
            "Medium maturity grain sorghum managed under dryland or supplemental irrigation.",
        ),
    ]
}
