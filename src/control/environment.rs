use crate::constants::{AIR_DENSITY_SEA_LEVEL, DENSITY_SCALE_HEIGHT};
use crate::control::vehicle::VehicleParameters;

/// US Standard Atmosphere 1976 speed of sound, (altitude m, sound speed m/s).
/// Must stay sorted ascending by altitude.
const SPEED_OF_SOUND_TABLE: [(f64, f64); 26] = [
    (0.0, 340.29),
    (1_000.0, 336.43),
    (2_000.0, 332.53),
    (3_000.0, 328.58),
    (4_000.0, 324.59),
    (5_000.0, 320.55),
    (6_000.0, 316.45),
    (7_000.0, 312.31),
    (8_000.0, 308.11),
    (9_000.0, 303.85),
    (10_000.0, 299.53),
    (11_000.0, 295.07),
    (20_000.0, 295.07),
    (25_000.0, 298.39),
    (30_000.0, 301.71),
    (35_000.0, 307.57),
    (40_000.0, 317.19),
    (45_000.0, 326.62),
    (50_000.0, 329.80),
    (55_000.0, 325.42),
    (60_000.0, 314.07),
    (65_000.0, 302.46),
    (70_000.0, 293.99),
    (75_000.0, 285.67),
    (80_000.0, 282.54),
    (86_000.0, 274.10),
];

/// Altitude-indexed atmosphere: exponential density and a stepped sound-speed table.
#[derive(Debug, Clone, PartialEq)]
pub struct AtmosphereTable {
    sea_level_density: f64,
    scale_height: f64,
    sound_speed: &'static [(f64, f64)],
}

impl Default for AtmosphereTable {
    fn default() -> Self {
        AtmosphereTable::new(AIR_DENSITY_SEA_LEVEL, DENSITY_SCALE_HEIGHT)
    }
}

impl AtmosphereTable {
    pub fn new(sea_level_density: f64, scale_height: f64) -> Self {
        AtmosphereTable {
            sea_level_density,
            scale_height,
            sound_speed: &SPEED_OF_SOUND_TABLE,
        }
    }

    pub fn from_parameters(params: &VehicleParameters) -> Self {
        AtmosphereTable::new(params.sea_level_density, params.density_scale_height)
    }

    /// `rho0 * exp(-h / H)`. Strictly positive for finite `h`; only a rough fit above ~50 km.
    pub fn density(&self, altitude: f64) -> f64 {
        debug_assert!(altitude.is_finite(), "non-finite altitude {altitude}");
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }

    /// Sound speed of the first breakpoint at or above `altitude`, or of the last
    /// breakpoint once the table is exhausted.
    ///
    /// Linear scan over a short table; a `partition_point` binary search is a drop-in
    /// replacement should the table grow.
    pub fn speed_of_sound(&self, altitude: f64) -> f64 {
        debug_assert!(altitude.is_finite(), "non-finite altitude {altitude}");
        self.sound_speed
            .iter()
            .find(|(breakpoint, _)| *breakpoint >= altitude)
            .or(self.sound_speed.last())
            .map_or(SPEED_OF_SOUND_TABLE[0].1, |(_, speed)| *speed)
    }
}
