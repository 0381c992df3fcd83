use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for one city, as reported by the weather provider.
/// Consumed once for display; nothing is cached between lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub observation_time: DateTime<Utc>,
    pub condition: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: f64,
    pub wind_speed_mps: f64,
}
