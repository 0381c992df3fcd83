//! The interactive weather lookup loop: prompt for a city, fetch, print,
//! repeat until `quit`/`exit`. Fetching sits behind the provider trait;
//! formatting is a pure function; this module is only the control shell.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tubtools_core::provider::openweather::OpenWeatherProvider;
use tubtools_core::{Config, ProviderError, WeatherProvider};

use crate::{prompt, report};

const FAREWELL: &str = "Thank you for using Weather App. Goodbye!";

pub async fn run() -> Result<()> {
    let config = Config::load()?;
    // Missing key is fatal before the first prompt.
    let api_key = config.resolve_api_key()?;
    let provider = OpenWeatherProvider::new(api_key)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    run_loop(&provider, &mut input, &mut out).await
}

enum CityInput {
    Quit,
    Empty,
    City(String),
}

fn classify(line: &str) -> CityInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return CityInput::Empty;
    }
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        return CityInput::Quit;
    }
    CityInput::City(trimmed.to_string())
}

async fn run_loop<R: BufRead, W: Write>(
    provider: &dyn WeatherProvider,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Welcome to the Weather App!")?;
    writeln!(out, "Type 'quit' or 'exit' to close the app.\n")?;

    loop {
        let Some(line) = prompt::read_line(input, out, "Enter city name: ")? else {
            // End of input behaves like an explicit quit.
            writeln!(out, "{FAREWELL}")?;
            return Ok(());
        };

        match classify(&line) {
            CityInput::Quit => {
                writeln!(out, "{FAREWELL}")?;
                return Ok(());
            }
            CityInput::Empty => {
                writeln!(out, "Please enter a valid city name.")?;
            }
            CityInput::City(city) => match provider.current_weather(&city).await {
                Ok(weather) => write!(out, "{}", report::render(&weather))?,
                Err(ProviderError::CityNotFound { city }) => {
                    writeln!(out, "Error: City '{city}' not found.")?;
                }
                Err(err) => {
                    writeln!(out, "Error fetching weather data: {err}")?;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tubtools_core::WeatherReport;

    /// Counts lookups so tests can assert when the network boundary
    /// is (not) crossed.
    #[derive(Debug, Default)]
    struct MockProvider {
        calls: AtomicUsize,
        not_found: bool,
    }

    #[async_trait]
    impl WeatherProvider for MockProvider {
        async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.not_found {
                return Err(ProviderError::CityNotFound { city: city.to_string() });
            }

            Ok(WeatherReport {
                city: city.to_string(),
                country: "UA".to_string(),
                observation_time: Utc::now(),
                condition: "clear sky".to_string(),
                temperature_c: 20.0,
                feels_like_c: 19.0,
                humidity_pct: 40,
                pressure_hpa: 1015.0,
                wind_speed_mps: 1.5,
            })
        }
    }

    async fn drive(provider: &MockProvider, stdin: &str) -> String {
        let mut input = Cursor::new(stdin.to_string());
        let mut out = Vec::new();
        run_loop(provider, &mut input, &mut out).await.expect("loop must not fail");
        String::from_utf8(out).expect("output must be utf-8")
    }

    #[tokio::test]
    async fn quit_terminates_with_farewell() {
        let provider = MockProvider::default();
        let out = drive(&provider, "quit\n").await;

        assert!(out.contains(FAREWELL));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn exit_is_case_insensitive() {
        let provider = MockProvider::default();
        let out = drive(&provider, "EXIT\n").await;

        assert!(out.contains(FAREWELL));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_input_never_triggers_a_lookup() {
        let provider = MockProvider::default();
        let out = drive(&provider, "\n   \nquit\n").await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert_eq!(out.matches("Please enter a valid city name.").count(), 2);
    }

    #[tokio::test]
    async fn city_lookup_prints_report_and_loops() {
        let provider = MockProvider::default();
        let out = drive(&provider, "Kyiv\nquit\n").await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert!(out.contains("Weather in Kyiv, UA"));
        assert!(out.contains(FAREWELL));
    }

    #[tokio::test]
    async fn unknown_city_prints_message_and_continues() {
        let provider = MockProvider { not_found: true, ..MockProvider::default() };
        let out = drive(&provider, "Atlantis\nquit\n").await;

        assert!(out.contains("Error: City 'Atlantis' not found."));
        assert!(out.contains(FAREWELL));
    }

    #[tokio::test]
    async fn end_of_input_acts_like_quit() {
        let provider = MockProvider::default();
        let out = drive(&provider, "").await;

        assert!(out.contains(FAREWELL));
    }
}
