use crate::control::vehicle::VehicleParameters;

const SUBSONIC_MACH_LIMIT: f64 = 0.8;
const TRANSONIC_MACH_LIMIT: f64 = 1.068;
const SUBSONIC_DRAG_COEFFICIENT: f64 = 0.29;

/// Drag and lift of the vehicle along its flight path.
#[derive(Debug, Clone, PartialEq)]
pub struct Aerodynamics {
    pub reference_area: f64,
    pub lift_coefficient_slope: f64,
}

impl Aerodynamics {
    pub fn new(reference_area: f64, lift_coefficient_slope: f64) -> Self {
        Aerodynamics {
            reference_area,
            lift_coefficient_slope,
        }
    }

    pub fn from_parameters(params: &VehicleParameters) -> Self {
        Aerodynamics::new(params.reference_area, params.lift_coefficient_slope)
    }

    /// Piecewise drag coefficient `Cx(M)`.
    ///
    /// Continuity at the breakpoints is not enforced: `Cx(1.068) = 0.558` while the
    /// supersonic branch starts near `0.5592`. The jump is part of the model.
    pub fn drag_coefficient(mach: f64) -> f64 {
        if mach <= SUBSONIC_MACH_LIMIT {
            SUBSONIC_DRAG_COEFFICIENT
        } else if mach <= TRANSONIC_MACH_LIMIT {
            mach - 0.51
        } else {
            0.091 + 0.5 / mach
        }
    }

    /// `X = 0.5 * Cx * rho * S * V^2`
    pub fn drag_force(&self, coefficient: f64, density: f64, velocity: f64) -> f64 {
        0.5 * coefficient * density * self.reference_area * velocity.powi(2)
    }

    /// `Y = 0.5 * Cy * rho * S * alpha * V^2`
    pub fn lift_force(&self, density: f64, velocity: f64, angle_of_attack: f64) -> f64 {
        0.5 * self.lift_coefficient_slope
            * density
            * self.reference_area
            * angle_of_attack
            * velocity.powi(2)
    }
}
