use crate::{
    control::{
        mission::{MissionPhase, PhaseController},
        propulsion::PropulsionSystem,
        vehicle::VehicleParameters,
    },
    errors::SimulationError,
    trajectory_system::{
        kinematics::{FlightIntegrator, FlightState},
        orbital::{OrbitalElements, OrbitalMechanics},
    },
    utils::vector2d::Vector2D,
};

/// Read-only view of the flight after a tick, handed to renderers and telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSnapshot {
    pub time: f64,
    pub position: Vector2D,
    pub velocity: f64,
    pub angle: f64,
    pub mass: f64,
    pub thrust_active: bool,
    pub phase: MissionPhase,
    pub orbital_elements: Option<OrbitalElements>,
}

/// One vehicle flying one mission: phase logic, integration and insertion, advanced one
/// fixed step per host frame.
#[derive(Debug, Clone)]
pub struct Rocket {
    integrator: FlightIntegrator,
    phase_controller: PhaseController,
    orbital_mechanics: OrbitalMechanics,
    orbital_elements: Option<OrbitalElements>,
    stall_reported: bool,
}

impl Rocket {
    pub fn new(params: VehicleParameters) -> Result<Self, SimulationError> {
        let phase_controller = PhaseController::from_parameters(&params);
        let orbital_mechanics = OrbitalMechanics::from_parameters(&params);
        Ok(Rocket {
            integrator: FlightIntegrator::new(params)?,
            phase_controller,
            orbital_mechanics,
            orbital_elements: None,
            stall_reported: false,
        })
    }

    pub fn state(&self) -> &FlightState {
        self.integrator.state()
    }

    pub fn parameters(&self) -> &VehicleParameters {
        self.integrator.parameters()
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase_controller.get_current_phase()
    }

    pub fn orbital_elements(&self) -> Option<&OrbitalElements> {
        self.orbital_elements.as_ref()
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        let state = self.integrator.state();
        FlightSnapshot {
            time: state.time,
            position: state.position,
            velocity: state.velocity,
            angle: state.angle,
            mass: state.mass,
            thrust_active: state.thrust_active,
            phase: self.phase(),
            orbital_elements: self.orbital_elements,
        }
    }

    /// Runs one frame. `start` is the host's launch trigger; nothing moves until it is
    /// raised, and it is ignored afterwards.
    pub fn update(&mut self, start: bool) -> Result<FlightSnapshot, SimulationError> {
        if self.phase_controller.launch(start) {
            let params = self.parameters();
            let burn = PropulsionSystem::from_parameters(params).burn_duration(params.initial_mass);
            info!("Rocket launched! Expected burn time {:.2}s", burn);
        }
        if !self.phase_controller.is_launched() {
            return Ok(self.snapshot());
        }

        let time = self.integrator.next_time();
        let before = *self.integrator.state();
        self.transition(time, before.get_altitude(), before.thrust_active);

        let phase = self.phase();
        let after = *self.integrator.step(phase)?;
        if before.thrust_active && !after.thrust_active {
            info!(
                "Engine cut-off at t={:.2}s: mass {:.1} kg, velocity {:.1} m/s",
                after.time, after.mass, after.velocity
            );
        }
        self.transition(after.time, after.get_altitude(), after.thrust_active);

        if self.phase() == MissionPhase::ExoAtmospheric && self.orbital_elements.is_none() {
            self.insert(&after);
        }

        if after.velocity == 0.0 && !self.stall_reported {
            self.stall_reported = true;
            warn!(
                "Vehicle stalled at t={:.2}s, altitude {:.1} m; integrating in place",
                after.time,
                after.get_altitude()
            );
        }

        event!(
            "Angle - {:.4} | Mass - {:.2} | X - {:.2} | Y - {:.2} | Velocity - {:.2}",
            after.angle,
            after.mass,
            after.position.x,
            after.position.y,
            after.velocity
        );

        Ok(self.snapshot())
    }

    fn transition(&mut self, time: f64, altitude: f64, thrust_active: bool) {
        if let Some((from, to)) = self.phase_controller.evaluate(time, altitude, thrust_active) {
            info!(
                "Phase transition at t={:.2}s, altitude {:.1} m: {} -> {}",
                time, altitude, from, to
            );
        }
    }

    fn insert(&mut self, state: &FlightState) {
        let elements =
            self.orbital_mechanics
                .compute(state.velocity, state.angle, state.get_altitude());
        info!(
            "Exo-atmospheric insertion at t={:.2}s: e = {:.4}, p = {:.1} km, r = {:.1} km",
            state.time,
            elements.eccentricity,
            elements.semi_latus_rectum / 1_000.0,
            elements.geocentric_radius / 1_000.0
        );
        self.orbital_elements = Some(elements);
    }
}
