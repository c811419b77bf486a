use crate::control::mission::MissionPhase;
use crate::control::vehicle::VehicleParameters;
use crate::trajectory_system::kinematics::FlightState;

/// Forces acting on the flight path during the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnForces {
    pub thrust: f64,
    pub lift: f64,
    pub angle_of_attack: f64,
    pub gravity: f64,
}

/// Commanded flight-path angle: vertical rise, quadratic programmed turn, then either a
/// held angle or a free gravity turn.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchProgram {
    pub start_angle: f64,
    pub finish_angle: f64,
    pub turn_start_time: f64,
    pub turn_end_time: f64,
    pub freeze_angle_after_burnout: bool,
}

impl PitchProgram {
    pub fn new(
        start_angle: f64,
        finish_angle: f64,
        turn_start_time: f64,
        turn_end_time: f64,
        freeze_angle_after_burnout: bool,
    ) -> Self {
        PitchProgram {
            start_angle,
            finish_angle,
            turn_start_time,
            turn_end_time,
            freeze_angle_after_burnout,
        }
    }

    pub fn from_parameters(params: &VehicleParameters) -> Self {
        PitchProgram::new(
            params.start_angle,
            params.finish_angle,
            params.turn_start_time,
            params.turn_end_time,
            params.freeze_angle_after_burnout,
        )
    }

    /// Progress through the turn window, clamped to `[0, 1]`.
    pub fn relative_time(&self, time: f64) -> f64 {
        ((time - self.turn_start_time) / (self.turn_end_time - self.turn_start_time)).clamp(0.0, 1.0)
    }

    /// `start - 2*delta*r + delta*r^2` with `delta = start - finish`.
    /// Equals `start` at `r = 0`, `finish` at `r = 1`, and has zero slope at the end.
    pub fn programmed_angle(&self, time: f64) -> f64 {
        let r = self.relative_time(time);
        let delta = self.start_angle - self.finish_angle;
        self.start_angle - 2.0 * delta * r + delta * r.powi(2)
    }

    /// `d(theta)/dt = (P*sin(alpha) + Y) / (m*V) - g*cos(theta) / V`
    ///
    /// Zero while the vehicle has no forward speed.
    pub fn gravity_turn_rate(forces: &TurnForces, mass: f64, velocity: f64, angle: f64) -> f64 {
        if velocity <= 0.0 {
            return 0.0;
        }
        (forces.thrust * forces.angle_of_attack.sin() + forces.lift) / (mass * velocity)
            - forces.gravity * angle.cos() / velocity
    }

    /// Flight-path angle at the end of a tick that finishes at `time`.
    ///
    /// Rates are taken from `state`, the start of the tick.
    pub fn commanded_angle(
        &self,
        phase: MissionPhase,
        time: f64,
        state: &FlightState,
        forces: &TurnForces,
        step: f64,
    ) -> f64 {
        match phase {
            MissionPhase::PreLaunch | MissionPhase::ExoAtmospheric => state.angle,
            MissionPhase::VerticalRise => self.start_angle,
            MissionPhase::ProgrammedTurn => self.programmed_angle(time),
            MissionPhase::PoweredEnd => self.finish_angle,
            MissionPhase::UnpoweredCoast if self.freeze_angle_after_burnout => self.finish_angle,
            MissionPhase::UnpoweredCoast => {
                state.angle
                    + step * Self::gravity_turn_rate(forces, state.mass, state.velocity, state.angle)
            }
        }
    }
}
