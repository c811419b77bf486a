use rocket_trajectory::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = VehicleParameters::reference();
    let time_step = params.time_step;
    let mut rocket = Rocket::new(params)?;

    let mut telemetry = Telemetry::new(5.0);
    telemetry.collect_data(&rocket.snapshot());

    // The host presses "start" on its first frame
    let mut start = true;
    let mut insertion_time = None;
    let mut frame = 0_u64;
    while (frame as f64) * time_step < MAX_SIMULATION_TIME {
        match rocket.update(start) {
            Ok(snapshot) => {
                telemetry.collect_data(&snapshot);
                start = false;
                frame += 1;

                if snapshot.orbital_elements.is_some() {
                    let entered = *insertion_time.get_or_insert(snapshot.time);
                    if snapshot.time - entered >= POST_INSERTION_TIME {
                        info!("Exo-atmospheric coast recorded. Ending simulation.");
                        break;
                    }
                }
            }
            Err(e) => {
                warn!("Error during simulation step: {}", e);
                break;
            }
        }
    }

    telemetry.display_data();

    Ok(())
}
