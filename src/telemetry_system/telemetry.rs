use crate::control::mission::MissionPhase;
use crate::control::rocket::FlightSnapshot;
use crate::trajectory_system::orbital::OrbitalElements;
use crate::utils::vector2d::Vector2D;

/// Passive consumer of flight snapshots: keeps extremes, phase timings and a sampled log.
pub struct Telemetry {
    pub log: Vec<String>,
    sample_interval: f64,
    next_sample_time: f64,
    max_velocity: f64,
    max_altitude: f64,
    min_mass: f64,
    phase_times: Vec<(MissionPhase, f64)>,
    orbital_elements: Option<OrbitalElements>,
}

impl Telemetry {
    /// Logs one line per `sample_interval` seconds of simulated time.
    pub fn new(sample_interval: f64) -> Self {
        Telemetry {
            log: Vec::new(),
            sample_interval,
            next_sample_time: 0.0,
            max_velocity: 0.0,
            max_altitude: 0.0,
            min_mass: f64::MAX,
            phase_times: Vec::new(),
            orbital_elements: None,
        }
    }

    fn format_vector2d(vec: &Vector2D, precision: usize) -> String {
        format!(
            "x = {:.precision$} m, y = {:.precision$} m",
            vec.x,
            vec.y,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn collect_data(&mut self, snapshot: &FlightSnapshot) {
        self.max_velocity = self.max_velocity.max(snapshot.velocity);
        self.max_altitude = self.max_altitude.max(snapshot.position.y);
        self.min_mass = self.min_mass.min(snapshot.mass);

        if self.phase_times.last().map(|(phase, _)| *phase) != Some(snapshot.phase) {
            self.phase_times.push((snapshot.phase, snapshot.time));
        }
        if self.orbital_elements.is_none() {
            self.orbital_elements = snapshot.orbital_elements;
        }

        if snapshot.phase == MissionPhase::PreLaunch || snapshot.time < self.next_sample_time {
            return;
        }
        self.next_sample_time = snapshot.time + self.sample_interval;

        let data = format!(
            "Time: {}\n\
                 Phase: {}\n\
                 Position: {}\n\
                 Velocity: {:.2} m/s\n\
                 Flight-path angle: {:.2}°\n\
                 Mass: {:.2} kg\n\
                 Engine: {}\n",
            Self::format_time(snapshot.time),
            snapshot.phase,
            Self::format_vector2d(&snapshot.position, 2),
            snapshot.velocity,
            snapshot.angle.to_degrees(),
            snapshot.mass,
            if snapshot.thrust_active { "burning" } else { "off" },
        );
        self.log.push(data);
    }

    pub fn get_max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn get_max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn get_min_mass(&self) -> f64 {
        self.min_mass
    }

    pub fn get_phase_times(&self) -> &[(MissionPhase, f64)] {
        &self.phase_times
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Simulation Summary ---");
        println!("Max Velocity: {:.2} m/s", self.max_velocity);
        println!("Max Altitude: {}", Self::format_altitude(self.max_altitude));
        println!("Min Mass: {:.2} kg", self.min_mass);

        println!("\n--- Phase Transitions ---");
        for (phase, time) in &self.phase_times {
            println!("Phase {} reached at: {}", phase, Self::format_time(*time));
        }

        if let Some(elements) = &self.orbital_elements {
            println!("\n--- Insertion Orbit ---");
            println!(
                "Altitude: {}",
                Self::format_altitude(elements.insertion_altitude)
            );
            println!(
                "Flight-path angle: {:.2}°",
                elements.insertion_angle.to_degrees()
            );
            println!("Eccentricity: {:.4}", elements.eccentricity);
            println!(
                "Semi-latus rectum: {}",
                Self::format_altitude(elements.semi_latus_rectum)
            );
            println!(
                "Geocentric radius: {}",
                Self::format_altitude(elements.geocentric_radius)
            );
        }
    }
}
