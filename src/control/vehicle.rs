use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, ANGLE_OF_ATTACK, ANOMALY_OFFSET_FACTOR, DENSITY_SCALE_HEIGHT,
    EARTH_GRAVITATIONAL_PARAMETER, EARTH_RADIUS, EXO_ATMOSPHERE_ALTITUDE, FINISH_ANGLE, GRAVITY,
    INITIAL_MASS, INITIAL_VELOCITY, LIFT_COEFFICIENT_SLOPE, MASS_FLOW_RATE, PROPELLANT_FRACTION,
    ROCKET_REFERENCE_AREA, ROCKET_THRUST, START_ANGLE, TIME_STEP, TURN_END_TIME, TURN_START_TIME,
};
use crate::errors::SimulationError;

/// Immutable description of the vehicle, the launch site and the flight program.
///
/// Constructed once, checked with [`VehicleParameters::validate`], and never mutated
/// while a flight is in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleParameters {
    pub initial_mass: f64,
    /// Share of the initial mass that is propellant (`mut`).
    pub propellant_fraction: f64,
    pub burn_rate: f64,
    /// End of the vertical rise (`ta`).
    pub turn_start_time: f64,
    /// End of the programmed turn (`tp`).
    pub turn_end_time: f64,
    pub thrust: f64,
    pub reference_area: f64,
    pub gravity: f64,
    pub planet_radius: f64,
    pub gravitational_parameter: f64,
    pub start_angle: f64,
    pub finish_angle: f64,
    pub time_step: f64,
    pub initial_velocity: f64,
    pub sea_level_density: f64,
    pub density_scale_height: f64,
    /// Thrust misalignment and angle of attack (`alpha`).
    pub angle_of_attack: f64,
    pub lift_coefficient_slope: f64,
    pub exo_atmosphere_altitude: f64,
    pub anomaly_offset_factor: f64,
    /// Hold `finish_angle` during the unpowered coast instead of integrating the
    /// gravity-turn equation.
    pub freeze_angle_after_burnout: bool,
}

impl Default for VehicleParameters {
    fn default() -> Self {
        VehicleParameters {
            initial_mass: INITIAL_MASS,
            propellant_fraction: PROPELLANT_FRACTION,
            burn_rate: MASS_FLOW_RATE,
            turn_start_time: TURN_START_TIME,
            turn_end_time: TURN_END_TIME,
            thrust: ROCKET_THRUST,
            reference_area: ROCKET_REFERENCE_AREA,
            gravity: GRAVITY,
            planet_radius: EARTH_RADIUS,
            gravitational_parameter: EARTH_GRAVITATIONAL_PARAMETER,
            start_angle: START_ANGLE,
            finish_angle: FINISH_ANGLE,
            time_step: TIME_STEP,
            initial_velocity: INITIAL_VELOCITY,
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            density_scale_height: DENSITY_SCALE_HEIGHT,
            angle_of_attack: ANGLE_OF_ATTACK,
            lift_coefficient_slope: LIFT_COEFFICIENT_SLOPE,
            exo_atmosphere_altitude: EXO_ATMOSPHERE_ALTITUDE,
            anomaly_offset_factor: ANOMALY_OFFSET_FACTOR,
            freeze_angle_after_burnout: false,
        }
    }
}

impl VehicleParameters {
    /// The reference vehicle: 3.8 t, 120 kN, 4 s vertical rise, turn complete at 40 s.
    pub fn reference() -> Self {
        Self::default()
    }

    /// Mass left once every kilogram of propellant has burned (`mk`).
    pub fn dry_mass(&self) -> f64 {
        self.initial_mass * (1.0 - self.propellant_fraction)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let finite = [
            ("initial_mass", self.initial_mass),
            ("propellant_fraction", self.propellant_fraction),
            ("burn_rate", self.burn_rate),
            ("turn_start_time", self.turn_start_time),
            ("turn_end_time", self.turn_end_time),
            ("thrust", self.thrust),
            ("reference_area", self.reference_area),
            ("gravity", self.gravity),
            ("planet_radius", self.planet_radius),
            ("gravitational_parameter", self.gravitational_parameter),
            ("start_angle", self.start_angle),
            ("finish_angle", self.finish_angle),
            ("time_step", self.time_step),
            ("initial_velocity", self.initial_velocity),
            ("sea_level_density", self.sea_level_density),
            ("density_scale_height", self.density_scale_height),
            ("angle_of_attack", self.angle_of_attack),
            ("lift_coefficient_slope", self.lift_coefficient_slope),
            ("exo_atmosphere_altitude", self.exo_atmosphere_altitude),
            ("anomaly_offset_factor", self.anomaly_offset_factor),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(invalid(format!("{name} must be finite, got {value}")));
        }

        let positive = [
            ("time_step", self.time_step),
            ("initial_mass", self.initial_mass),
            ("burn_rate", self.burn_rate),
            ("reference_area", self.reference_area),
            ("gravity", self.gravity),
            ("planet_radius", self.planet_radius),
            ("gravitational_parameter", self.gravitational_parameter),
            ("sea_level_density", self.sea_level_density),
            ("density_scale_height", self.density_scale_height),
            ("exo_atmosphere_altitude", self.exo_atmosphere_altitude),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, value)| *value <= 0.0) {
            return Err(invalid(format!("{name} must be positive, got {value}")));
        }

        if self.thrust < 0.0 {
            return Err(invalid(format!("thrust cannot be negative, got {}", self.thrust)));
        }
        if self.initial_velocity < 0.0 {
            return Err(invalid(format!(
                "initial_velocity cannot be negative, got {}",
                self.initial_velocity
            )));
        }
        if self.propellant_fraction <= 0.0 || self.propellant_fraction >= 1.0 {
            return Err(invalid(format!(
                "propellant_fraction must lie strictly between 0 and 1, got {}",
                self.propellant_fraction
            )));
        }
        if self.turn_start_time < 0.0 {
            return Err(invalid(format!(
                "turn_start_time cannot be negative, got {}",
                self.turn_start_time
            )));
        }
        if self.turn_end_time <= self.turn_start_time {
            return Err(invalid(format!(
                "turn_end_time ({}) must be later than turn_start_time ({})",
                self.turn_end_time, self.turn_start_time
            )));
        }
        if self.start_angle == self.finish_angle {
            return Err(invalid(format!(
                "start_angle and finish_angle are both {}; the pitch program would be degenerate",
                self.start_angle
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> SimulationError {
    SimulationError::InitializationError(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_configuration_is_valid() {
        let params = VehicleParameters::reference();
        assert!(params.validate().is_ok());
        assert_eq!(params, VehicleParameters::default());
        assert!(!params.freeze_angle_after_burnout);
    }

    #[test]
    fn test_dry_mass() {
        let params = VehicleParameters::reference();
        assert_abs_diff_eq!(params.dry_mass(), 1140.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_step() {
        for step in [0.0, -0.01] {
            let params = VehicleParameters {
                time_step: step,
                ..VehicleParameters::default()
            };
            assert!(matches!(
                params.validate(),
                Err(SimulationError::InitializationError(_))
            ));
        }
    }

    #[test]
    fn test_rejects_inverted_turn_window() {
        let params = VehicleParameters {
            turn_start_time: 40.0,
            turn_end_time: 40.0,
            ..VehicleParameters::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("turn_end_time"));
    }

    #[test]
    fn test_rejects_degenerate_pitch_program() {
        let params = VehicleParameters {
            finish_angle: 1.57,
            ..VehicleParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let params = VehicleParameters {
            thrust: f64::NAN,
            ..VehicleParameters::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("thrust must be finite"));
    }

    #[test]
    fn test_rejects_propellant_fraction_out_of_range() {
        for fraction in [0.0, 1.0, 1.2] {
            let params = VehicleParameters {
                propellant_fraction: fraction,
                ..VehicleParameters::default()
            };
            assert!(params.validate().is_err(), "fraction {fraction} accepted");
        }
    }

    #[test]
    fn test_rejects_negative_thrust_and_velocity() {
        let thrust = VehicleParameters {
            thrust: -1.0,
            ..VehicleParameters::default()
        };
        let velocity = VehicleParameters {
            initial_velocity: -1.0,
            ..VehicleParameters::default()
        };
        assert!(thrust.validate().is_err());
        assert!(velocity.validate().is_err());
    }
}
