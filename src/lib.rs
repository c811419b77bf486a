#[macro_use]
pub mod logger;

pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::environment::AtmosphereTable;
pub use control::guidance::{PitchProgram, TurnForces};
pub use control::mission::{MissionPhase, PhaseController};
pub use control::propulsion::PropulsionSystem;
pub use control::rocket::{FlightSnapshot, Rocket};
pub use control::vehicle::VehicleParameters;
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::{FlightIntegrator, FlightState};
pub use trajectory_system::orbital::{OrbitalElements, OrbitalMechanics};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
