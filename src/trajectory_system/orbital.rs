use crate::control::vehicle::VehicleParameters;

/// Insertion orbit computed once, from the state at the exo-atmosphere crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// `v^2 * (R + h) / mu`, twice the ratio of kinetic to potential energy.
    pub energy_ratio: f64,
    /// Insertion anomaly argument `beta` [rad].
    pub insertion_anomaly: f64,
    /// Semi-latus rectum `p` [m].
    pub semi_latus_rectum: f64,
    pub eccentricity: f64,
    /// Geocentric radius at the reference anomaly [m].
    pub geocentric_radius: f64,
    /// Flight-path angle at insertion [rad].
    pub insertion_angle: f64,
    /// Altitude at insertion [m].
    pub insertion_altitude: f64,
}

/// Planar two-body insertion geometry around a spherical planet.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalMechanics {
    pub planet_radius: f64,
    pub gravitational_parameter: f64,
    /// Empirical factor `k` in `cos(beta - k*beta)`. Stands in for the true-anomaly offset;
    /// not a general solution.
    pub anomaly_offset_factor: f64,
}

impl OrbitalMechanics {
    pub fn new(planet_radius: f64, gravitational_parameter: f64, anomaly_offset_factor: f64) -> Self {
        OrbitalMechanics {
            planet_radius,
            gravitational_parameter,
            anomaly_offset_factor,
        }
    }

    pub fn from_parameters(params: &VehicleParameters) -> Self {
        OrbitalMechanics::new(
            params.planet_radius,
            params.gravitational_parameter,
            params.anomaly_offset_factor,
        )
    }

    pub fn compute(&self, velocity: f64, angle: f64, altitude: f64) -> OrbitalElements {
        let radius = self.planet_radius + altitude;
        let energy_ratio = velocity.powi(2) * radius / self.gravitational_parameter;

        let tan_angle = angle.tan();
        let cos_squared = angle.cos().powi(2);
        let insertion_anomaly =
            (energy_ratio * tan_angle / (1.0 + tan_angle.powi(2) - energy_ratio)).atan();
        let semi_latus_rectum = energy_ratio * radius * cos_squared;
        let eccentricity =
            ((1.0 - energy_ratio).powi(2) * cos_squared + angle.sin().powi(2)).sqrt();
        let reference_anomaly = insertion_anomaly - self.anomaly_offset_factor * insertion_anomaly;
        let geocentric_radius =
            semi_latus_rectum / (1.0 - eccentricity * reference_anomaly.cos());

        OrbitalElements {
            energy_ratio,
            insertion_anomaly,
            semi_latus_rectum,
            eccentricity,
            geocentric_radius,
            insertion_angle: angle,
            insertion_altitude: altitude,
        }
    }
}
