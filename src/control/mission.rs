use std::fmt;

use crate::control::vehicle::VehicleParameters;

/// Flight phases in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MissionPhase {
    PreLaunch,
    VerticalRise,
    ProgrammedTurn,
    PoweredEnd,
    UnpoweredCoast,
    ExoAtmospheric,
}

impl fmt::Display for MissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissionPhase::PreLaunch => "pre-launch",
            MissionPhase::VerticalRise => "vertical rise",
            MissionPhase::ProgrammedTurn => "programmed turn",
            MissionPhase::PoweredEnd => "powered end",
            MissionPhase::UnpoweredCoast => "unpowered coast",
            MissionPhase::ExoAtmospheric => "exo-atmospheric",
        };
        write!(f, "{name}")
    }
}

/// Forward-only state machine over [`MissionPhase`].
///
/// Leaving `PreLaunch` needs the external start signal; every later transition is a pure
/// function of elapsed time, altitude and engine state against fixed thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseController {
    current_phase: MissionPhase,
    turn_start_time: f64,
    turn_end_time: f64,
    exo_atmosphere_altitude: f64,
}

impl PhaseController {
    pub fn new(turn_start_time: f64, turn_end_time: f64, exo_atmosphere_altitude: f64) -> Self {
        PhaseController {
            current_phase: MissionPhase::PreLaunch,
            turn_start_time,
            turn_end_time,
            exo_atmosphere_altitude,
        }
    }

    pub fn from_parameters(params: &VehicleParameters) -> Self {
        PhaseController::new(
            params.turn_start_time,
            params.turn_end_time,
            params.exo_atmosphere_altitude,
        )
    }

    pub fn get_current_phase(&self) -> MissionPhase {
        self.current_phase
    }

    pub fn is_launched(&self) -> bool {
        self.current_phase != MissionPhase::PreLaunch
    }

    /// Consumes the start signal. Returns `true` on the tick the vehicle leaves the pad.
    pub fn launch(&mut self, start: bool) -> bool {
        if start && !self.is_launched() {
            self.current_phase = MissionPhase::VerticalRise;
            true
        } else {
            false
        }
    }

    /// Phase dictated by the thresholds alone, ignoring history.
    pub fn phase_for(&self, time: f64, altitude: f64, thrust_active: bool) -> MissionPhase {
        if altitude > self.exo_atmosphere_altitude {
            MissionPhase::ExoAtmospheric
        } else if time < self.turn_start_time {
            MissionPhase::VerticalRise
        } else if time < self.turn_end_time {
            MissionPhase::ProgrammedTurn
        } else if thrust_active {
            MissionPhase::PoweredEnd
        } else {
            MissionPhase::UnpoweredCoast
        }
    }

    /// Moves forward to the phase the inputs call for, never back.
    ///
    /// Returns the `(from, to)` pair when a transition fired. Does nothing before launch.
    pub fn evaluate(
        &mut self,
        time: f64,
        altitude: f64,
        thrust_active: bool,
    ) -> Option<(MissionPhase, MissionPhase)> {
        if !self.is_launched() {
            return None;
        }
        let candidate = self.phase_for(time, altitude, thrust_active);
        if candidate > self.current_phase {
            let previous = self.current_phase;
            self.current_phase = candidate;
            Some((previous, candidate))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_controller() -> PhaseController {
        PhaseController::from_parameters(&VehicleParameters::reference())
    }

    #[test]
    fn test_starts_on_the_pad() {
        let controller = reference_controller();
        assert_eq!(controller.get_current_phase(), MissionPhase::PreLaunch);
        assert!(!controller.is_launched());
    }

    #[test]
    fn test_waits_for_start_signal() {
        let mut controller = reference_controller();
        assert_eq!(controller.evaluate(10.0, 0.0, true), None);
        assert!(!controller.launch(false));
        assert_eq!(controller.get_current_phase(), MissionPhase::PreLaunch);

        assert!(controller.launch(true));
        assert_eq!(controller.get_current_phase(), MissionPhase::VerticalRise);
        assert!(!controller.launch(true), "a second start must be ignored");
    }

    #[test]
    fn test_time_driven_transitions() {
        let mut controller = reference_controller();
        controller.launch(true);

        assert_eq!(controller.evaluate(3.99, 100.0, true), None);
        assert_eq!(
            controller.evaluate(4.0, 200.0, true),
            Some((MissionPhase::VerticalRise, MissionPhase::ProgrammedTurn))
        );
        assert_eq!(controller.evaluate(39.99, 10_000.0, true), None);
        assert_eq!(
            controller.evaluate(40.0, 13_000.0, true),
            Some((MissionPhase::ProgrammedTurn, MissionPhase::PoweredEnd))
        );
        assert_eq!(
            controller.evaluate(66.52, 40_000.0, false),
            Some((MissionPhase::PoweredEnd, MissionPhase::UnpoweredCoast))
        );
        assert_eq!(
            controller.evaluate(110.0, 95_000.5, false),
            Some((MissionPhase::UnpoweredCoast, MissionPhase::ExoAtmospheric))
        );
    }

    #[test]
    fn test_burnout_during_turn_waits_for_turn_end() {
        let mut controller = reference_controller();
        controller.launch(true);
        controller.evaluate(20.0, 5_000.0, false);
        assert_eq!(controller.get_current_phase(), MissionPhase::ProgrammedTurn);
        controller.evaluate(40.0, 9_000.0, false);
        assert_eq!(controller.get_current_phase(), MissionPhase::UnpoweredCoast);
    }

    #[test]
    fn test_exo_atmosphere_is_terminal() {
        let mut controller = reference_controller();
        controller.launch(true);
        controller.evaluate(100.0, 96_000.0, false);
        assert_eq!(controller.get_current_phase(), MissionPhase::ExoAtmospheric);

        // Falling back below the threshold does not leave the phase
        assert_eq!(controller.evaluate(500.0, 10.0, false), None);
        assert_eq!(controller.get_current_phase(), MissionPhase::ExoAtmospheric);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let controller = reference_controller();
        assert_eq!(controller.phase_for(50.0, 95_000.0, false), MissionPhase::UnpoweredCoast);
        assert_eq!(
            controller.phase_for(50.0, 95_000.1, false),
            MissionPhase::ExoAtmospheric
        );
    }

    #[test]
    fn test_phases_are_ordered() {
        assert!(MissionPhase::PreLaunch < MissionPhase::VerticalRise);
        assert!(MissionPhase::ProgrammedTurn < MissionPhase::PoweredEnd);
        assert!(MissionPhase::PoweredEnd < MissionPhase::UnpoweredCoast);
        assert!(MissionPhase::UnpoweredCoast < MissionPhase::ExoAtmospheric);
        assert_eq!(MissionPhase::PoweredEnd.to_string(), "powered end");
    }
}
