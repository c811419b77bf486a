use crate::control::vehicle::VehicleParameters;

/// Single-burn propellant depletion at a constant mass flow.
#[derive(Debug, Clone, PartialEq)]
pub struct PropulsionSystem {
    pub thrust: f64,
    pub burn_rate: f64,
    pub dry_mass: f64,
}

impl PropulsionSystem {
    pub fn new(thrust: f64, burn_rate: f64, dry_mass: f64) -> Self {
        PropulsionSystem {
            thrust,
            burn_rate,
            dry_mass,
        }
    }

    pub fn from_parameters(params: &VehicleParameters) -> Self {
        PropulsionSystem::new(params.thrust, params.burn_rate, params.dry_mass())
    }

    /// Burns propellant for one step and reports whether the engine still runs.
    ///
    /// The mass never drops below dry mass. The first call that finds the tanks empty
    /// reports cut-off; callers stop advancing once it has, since the engine cannot restart.
    pub fn advance(&self, current_mass: f64, step: f64) -> (f64, bool) {
        if current_mass <= self.dry_mass {
            return (self.dry_mass, false);
        }
        let new_mass = (current_mass - self.burn_rate * step).max(self.dry_mass);
        (new_mass, true)
    }

    pub fn get_thrust(&self, thrust_active: bool) -> f64 {
        if thrust_active {
            self.thrust
        } else {
            0.0
        }
    }

    pub fn burn_duration(&self, initial_mass: f64) -> f64 {
        (initial_mass - self.dry_mass).max(0.0) / self.burn_rate
    }
}
