use crate::{
    control::{
        environment::AtmosphereTable,
        guidance::{PitchProgram, TurnForces},
        mission::MissionPhase,
        propulsion::PropulsionSystem,
        vehicle::VehicleParameters,
    },
    errors::SimulationError,
    utils::vector2d::Vector2D,
};

use super::aerodynamics::Aerodynamics;

/// Vehicle state along the flight path. Velocity is a speed; its direction is `angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub time: f64,
    pub position: Vector2D,
    pub velocity: f64,
    pub angle: f64,
    pub mass: f64,
    pub thrust_active: bool,
}

impl FlightState {
    pub fn on_pad(params: &VehicleParameters) -> Self {
        FlightState {
            time: 0.0,
            position: Vector2D::default(),
            velocity: params.initial_velocity,
            angle: params.start_angle,
            mass: params.initial_mass,
            thrust_active: true,
        }
    }

    pub fn get_altitude(&self) -> f64 {
        self.position.y
    }

    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.position.is_finite()
            && self.velocity.is_finite()
            && self.angle.is_finite()
            && self.mass.is_finite()
    }
}

/// Aerodynamic conditions at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirData {
    pub density: f64,
    pub speed_of_sound: f64,
    pub mach: f64,
    pub drag_coefficient: f64,
    pub drag: f64,
    pub lift: f64,
}

/// Fixed-step explicit Euler integrator. Sole owner and mutator of the [`FlightState`].
#[derive(Debug, Clone)]
pub struct FlightIntegrator {
    params: VehicleParameters,
    atmosphere: AtmosphereTable,
    aerodynamics: Aerodynamics,
    propulsion: PropulsionSystem,
    pitch_program: PitchProgram,
    state: FlightState,
    ticks: u64,
}

impl FlightIntegrator {
    pub fn new(params: VehicleParameters) -> Result<Self, SimulationError> {
        params.validate()?;
        Ok(FlightIntegrator {
            atmosphere: AtmosphereTable::from_parameters(&params),
            aerodynamics: Aerodynamics::from_parameters(&params),
            propulsion: PropulsionSystem::from_parameters(&params),
            pitch_program: PitchProgram::from_parameters(&params),
            state: FlightState::on_pad(&params),
            ticks: 0,
            params,
        })
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn parameters(&self) -> &VehicleParameters {
        &self.params
    }

    pub fn get_ticks(&self) -> u64 {
        self.ticks
    }

    /// Elapsed time once the next tick completes. Derived from the tick count so that the
    /// clock does not accumulate rounding error.
    pub fn next_time(&self) -> f64 {
        (self.ticks + 1) as f64 * self.params.time_step
    }

    pub fn air_data(&self, state: &FlightState) -> AirData {
        let altitude = state.get_altitude();
        let density = self.atmosphere.density(altitude);
        let speed_of_sound = self.atmosphere.speed_of_sound(altitude);
        let mach = state.velocity / speed_of_sound;
        let drag_coefficient = Aerodynamics::drag_coefficient(mach);
        AirData {
            density,
            speed_of_sound,
            mach,
            drag_coefficient,
            drag: self
                .aerodynamics
                .drag_force(drag_coefficient, density, state.velocity),
            lift: self
                .aerodynamics
                .lift_force(density, state.velocity, self.params.angle_of_attack),
        }
    }

    /// Advances the owned state by one step under the equations of `phase`.
    ///
    /// Fails without touching the state if the step would produce a non-finite value.
    pub fn step(&mut self, phase: MissionPhase) -> Result<&FlightState, SimulationError> {
        let time = self.next_time();
        let next = self.advance(&self.state, phase, time);
        if !next.is_finite() {
            return Err(SimulationError::PhysicsError(format!(
                "non-finite state after tick {} (t={time:.2}s): {next:?}",
                self.ticks + 1
            )));
        }
        self.state = next;
        self.ticks += 1;
        Ok(&self.state)
    }

    /// One explicit Euler step from `state` ending at `time`.
    ///
    /// Every rate is evaluated from `state`; velocity and position use the angle and mass
    /// the tick started with.
    pub fn advance(&self, state: &FlightState, phase: MissionPhase, time: f64) -> FlightState {
        let dt = self.params.time_step;
        let air = self.air_data(state);
        let thrust = self.propulsion.get_thrust(state.thrust_active);
        let alpha = self.params.angle_of_attack;
        let gravity = self.params.gravity;

        let acceleration =
            (thrust * alpha.cos() - air.drag) / state.mass - gravity * state.angle.sin();
        let velocity = (state.velocity + dt * acceleration).max(0.0);
        let position = state.position + Vector2D::from_angle(state.angle) * (dt * state.velocity);

        let forces = TurnForces {
            thrust,
            lift: air.lift,
            angle_of_attack: alpha,
            gravity,
        };
        let angle = self
            .pitch_program
            .commanded_angle(phase, time, state, &forces, dt);

        let (mass, thrust_active) = if state.thrust_active {
            self.propulsion.advance(state.mass, dt)
        } else {
            (state.mass, false)
        };

        FlightState {
            time,
            position,
            velocity,
            angle,
            mass,
            thrust_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_integrator() -> FlightIntegrator {
        FlightIntegrator::new(VehicleParameters::reference()).unwrap()
    }

    #[test]
    fn test_starts_on_pad() {
        let integrator = reference_integrator();
        let state = integrator.state();
        assert_eq!(state.time, 0.0);
        assert_eq!(state.position, Vector2D::new(0.0, 0.0));
        assert_eq!(state.velocity, 10.0);
        assert_eq!(state.angle, 1.57);
        assert_eq!(state.mass, 3800.0);
        assert!(state.thrust_active);
        assert_eq!(integrator.get_ticks(), 0);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let params = VehicleParameters {
            time_step: 0.0,
            ..VehicleParameters::default()
        };
        assert!(matches!(
            FlightIntegrator::new(params),
            Err(SimulationError::InitializationError(_))
        ));
    }

    #[test]
    fn test_first_step_matches_hand_calculation() {
        let mut integrator = reference_integrator();
        let state = *integrator.step(MissionPhase::VerticalRise).unwrap();

        let drag = 0.5 * 0.29 * 1.23 * 0.92 * 10.0_f64.powi(2);
        let acceleration = (120_000.0 - drag) / 3800.0 - 9.8 * 1.57_f64.sin();
        assert_relative_eq!(state.velocity, 10.0 + 0.01 * acceleration, epsilon = 1e-12);
        assert_relative_eq!(state.position.x, 0.01 * 10.0 * 1.57_f64.cos(), epsilon = 1e-15);
        assert_relative_eq!(state.position.y, 0.01 * 10.0 * 1.57_f64.sin(), epsilon = 1e-15);
        assert_eq!(state.angle, 1.57);
        assert_abs_diff_eq!(state.mass, 3799.6, epsilon = 1e-9);
        assert_eq!(state.time, 0.01);
        assert!(state.thrust_active);
    }

    #[test]
    fn test_position_uses_angle_from_start_of_tick() {
        let integrator = reference_integrator();
        let start = FlightState {
            time: 39.99,
            position: Vector2D::new(5_000.0, 13_000.0),
            velocity: 950.0,
            angle: 0.7,
            mass: 2_200.4,
            thrust_active: true,
        };
        let next = integrator.advance(&start, MissionPhase::PoweredEnd, 40.0);

        assert_eq!(next.angle, 0.68);
        assert_relative_eq!(
            next.position.x,
            5_000.0 + 0.01 * 950.0 * 0.7_f64.cos(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            next.position.y,
            13_000.0 + 0.01 * 950.0 * 0.7_f64.sin(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_velocity_never_negative() {
        let integrator = reference_integrator();
        let stalled = FlightState {
            time: 200.0,
            position: Vector2D::new(0.0, 150_000.0),
            velocity: 0.001,
            angle: 1.2,
            mass: 1140.0,
            thrust_active: false,
        };
        let next = integrator.advance(&stalled, MissionPhase::ExoAtmospheric, 200.01);
        assert_eq!(next.velocity, 0.0);
        assert_eq!(next.angle, 1.2);
    }

    #[test]
    fn test_burned_out_mass_is_constant() {
        let integrator = reference_integrator();
        let coasting = FlightState {
            time: 80.0,
            position: Vector2D::new(30_000.0, 60_000.0),
            velocity: 2_500.0,
            angle: 0.6,
            mass: 1140.0,
            thrust_active: false,
        };
        let next = integrator.advance(&coasting, MissionPhase::UnpoweredCoast, 80.01);
        assert_eq!(next.mass, 1140.0);
        assert!(!next.thrust_active);
        assert!(next.angle < 0.6);
    }

    #[test]
    fn test_air_data() {
        let integrator = reference_integrator();
        let state = FlightState {
            velocity: 680.58,
            ..FlightState::on_pad(integrator.parameters())
        };
        let air = integrator.air_data(&state);
        assert_relative_eq!(air.density, 1.23, epsilon = 1e-12);
        assert_relative_eq!(air.speed_of_sound, 340.29, epsilon = 1e-12);
        assert_relative_eq!(air.mach, 2.0, epsilon = 1e-12);
        assert_relative_eq!(air.drag_coefficient, 0.341, epsilon = 1e-12);
        assert_eq!(air.lift, 0.0);
    }

    #[test]
    fn test_step_rejects_non_finite_state() {
        let mut integrator = reference_integrator();
        integrator.state.velocity = f64::INFINITY;
        let before = integrator.state;
        let err = integrator.step(MissionPhase::VerticalRise).unwrap_err();
        assert!(matches!(err, SimulationError::PhysicsError(_)));
        assert_eq!(integrator.get_ticks(), 0);
        assert_eq!(integrator.state.mass, before.mass);
    }

    #[test]
    fn test_clock_is_exact() {
        let mut integrator = reference_integrator();
        for _ in 0..400 {
            integrator.step(MissionPhase::VerticalRise).unwrap();
        }
        assert_eq!(integrator.state().time, 4.0);
        assert_eq!(integrator.get_ticks(), 400);
    }
}
