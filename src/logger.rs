//! Console logging for the flight core and its host.
//!
//! Levels are distinguished by a coloured prefix. `event!` is a per-tick trace and only
//! prints when `ROCKET_SIM_LOG_EVENTS` is set.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("\x1b[32m[INFO] \x1b[0m {}", format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        println!("\x1b[35m[WARN] \x1b[0m {}", format!($($arg)*))
    };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if std::env::var("ROCKET_SIM_LOG_EVENTS").is_ok() {
            println!("\x1b[36m[EVENT]\x1b[0m {}", format!($($arg)*))
        }
    };
}
