use serde::Deserialize;
use std::env;

// Reference catalog and limits, compiled in. There is no configuration
// file surface; only the log filter is env-tunable.
pub const MOVIES: [&str; 3] = ["Avengers", "Inception", "The Matrix"];
pub const SHOWTIMES: [&str; 4] = ["12:00 PM", "3:00 PM", "6:00 PM", "9:00 PM"];
pub const SEAT_CAPACITY: u32 = 50;
pub const MAX_TICKETS_PER_BOOKING: u32 = 10;

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub booking: BookingConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Catalog data and booking limits
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    pub movies: Vec<String>,
    pub showtimes: Vec<String>,
    pub seat_capacity: u32,
    pub max_tickets_per_booking: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "movie_booking=info".to_string()),
            },
            booking: BookingConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                rust_log: "movie_booking=info".to_string(),
            },
            booking: BookingConfig::default(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            movies: MOVIES.iter().map(|m| m.to_string()).collect(),
            showtimes: SHOWTIMES.iter().map(|s| s.to_string()).collect(),
            seat_capacity: SEAT_CAPACITY,
            max_tickets_per_booking: MAX_TICKETS_PER_BOOKING,
        }
    }
}
