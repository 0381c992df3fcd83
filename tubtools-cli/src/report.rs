//! Human-readable rendering of a weather report. Pure string building,
//! no I/O.

use chrono::{DateTime, Local};
use tubtools_core::WeatherReport;

const RULE_WIDTH: usize = 50;

pub fn render(report: &WeatherReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let local: DateTime<Local> = report.observation_time.with_timezone(&Local);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("Weather in {}, {}\n", report.city, report.country));
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("Time: {}\n", local.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!("Condition: {}\n", capitalize(&report.condition)));
    out.push_str(&format!(
        "Temperature: {:.1}°C (Feels like {:.1}°C)\n",
        report.temperature_c, report.feels_like_c
    ));
    out.push_str(&format!("Humidity: {}%\n", report.humidity_pct));
    out.push_str(&format!("Pressure: {:.0} hPa\n", report.pressure_hpa));
    out.push_str(&format!("Wind Speed: {:.1} m/s\n", report.wind_speed_mps));
    out.push_str(&format!("{rule}\n\n"));

    out
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
