// Physical Constants
pub const GRAVITY: f64 = 9.8; // m/s²
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters
pub const EARTH_GRAVITATIONAL_PARAMETER: f64 = 3.986_004_418e14; // m³/s²

// Vehicle Constants
pub const INITIAL_MASS: f64 = 3_800.0; // kg
pub const PROPELLANT_FRACTION: f64 = 0.7; // share of the initial mass that burns off
pub const MASS_FLOW_RATE: f64 = 40.0; // kg/s
pub const ROCKET_THRUST: f64 = 120_000.0; // N
pub const ROCKET_REFERENCE_AREA: f64 = 0.92; // m²
pub const INITIAL_VELOCITY: f64 = 10.0; // m/s

// Pitch Program
pub const TURN_START_TIME: f64 = 4.0; // s, end of the vertical rise
pub const TURN_END_TIME: f64 = 40.0; // s, end of the programmed turn
pub const START_ANGLE: f64 = 1.57; // rad
pub const FINISH_ANGLE: f64 = 0.68; // rad
pub const ANGLE_OF_ATTACK: f64 = 0.0; // rad
pub const LIFT_COEFFICIENT_SLOPE: f64 = 0.0; // per rad

// Atmosphere
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.23; // kg/m³
pub const DENSITY_SCALE_HEIGHT: f64 = 10_000.0; // m
pub const EXO_ATMOSPHERE_ALTITUDE: f64 = 95_000.0; // m

// Orbital insertion
pub const ANOMALY_OFFSET_FACTOR: f64 = 0.99;

// Simulation Parameters
pub const TIME_STEP: f64 = 0.01; // s
pub const MAX_SIMULATION_TIME: f64 = 600.0; // s
pub const POST_INSERTION_TIME: f64 = 30.0; // s of flight kept after exo-atmospheric entry
