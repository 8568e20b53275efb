use anyhow::Result;
use serde_json::Value;

use crate::models::ForecastPayload;

/// Fallback text when a forecast request cannot be completed
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";

/// Fallback text when a current weather request cannot be completed
pub const CURRENT_WEATHER_UNAVAILABLE: &str =
    "Unable to fetch current weather data for this location.";

/// Formats the daily forecast series into a human-readable string.
///
/// Errors if any value series is shorter than the `time` axis: upstream
/// guarantees equal lengths, so a mismatch is a contract violation that must
/// surface rather than be truncated away.
pub fn format_forecast(payload: &ForecastPayload) -> Result<String> {
    let daily = &payload.daily;
    let days = daily.time.len();

    if daily.temperature_2m_max.len() < days
        || daily.temperature_2m_min.len() < days
        || daily.precipitation_sum.len() < days
        || daily.weathercode.len() < days
    {
        anyhow::bail!(
            "daily series shorter than time axis: time={}, temperature_2m_max={}, temperature_2m_min={}, precipitation_sum={}, weathercode={}",
            days,
            daily.temperature_2m_max.len(),
            daily.temperature_2m_min.len(),
            daily.precipitation_sum.len(),
            daily.weathercode.len()
        );
    }

    let mut blocks = Vec::with_capacity(days);
    for i in 0..days {
        blocks.push(format!(
            "Date: {}\nMax Temperature: {}\u{00b0}C\nMin Temperature: {}\u{00b0}C\nPrecipitation: {} mm\nWeather Code: {}",
            daily.time[i],
            daily.temperature_2m_max[i],
            daily.temperature_2m_min[i],
            daily.precipitation_sum[i],
            daily.weathercode[i]
        ));
    }

    Ok(blocks.join("\n---\n"))
}

/// Serializes the full current weather payload as indented JSON.
/// Deliberate pass-through of the whole document, not a curated view.
pub fn format_current_weather(payload: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailySeries;

    fn payload(days: usize) -> ForecastPayload {
        let dates = ["2026-08-01", "2026-08-02", "2026-08-03"];
        ForecastPayload {
            daily: DailySeries {
                time: dates[..days].iter().map(|d| d.to_string()).collect(),
                temperature_2m_max: vec![24.1, 26.8, 22.0][..days].to_vec(),
                temperature_2m_min: vec![14.0, 15.3, 12.7][..days].to_vec(),
                precipitation_sum: vec![0.0, 1.2, 4.5][..days].to_vec(),
                weathercode: vec![1, 61, 3][..days].to_vec(),
            },
        }
    }

    #[test]
    fn forecast_blocks_match_indexed_values() {
        let text = format_forecast(&payload(2)).unwrap();

        let expected = "Date: 2026-08-01\n\
            Max Temperature: 24.1\u{00b0}C\n\
            Min Temperature: 14\u{00b0}C\n\
            Precipitation: 0 mm\n\
            Weather Code: 1\n\
            ---\n\
            Date: 2026-08-02\n\
            Max Temperature: 26.8\u{00b0}C\n\
            Min Temperature: 15.3\u{00b0}C\n\
            Precipitation: 1.2 mm\n\
            Weather Code: 61";
        assert_eq!(text, expected);
    }

    #[test]
    fn forecast_emits_one_block_per_day() {
        let text = format_forecast(&payload(3)).unwrap();
        assert_eq!(text.split("\n---\n").count(), 3);
        assert_eq!(text.matches("Date: ").count(), 3);
    }

    #[test]
    fn single_day_forecast_has_no_separator() {
        let text = format_forecast(&payload(1)).unwrap();
        assert!(!text.contains("---"));
        assert!(text.starts_with("Date: 2026-08-01\n"));
    }

    #[test]
    fn short_value_series_is_a_hard_error() {
        let mut p = payload(3);
        p.daily.precipitation_sum.truncate(2);

        let err = format_forecast(&p).unwrap_err();
        assert!(err.to_string().contains("shorter than time axis"));
    }

    #[test]
    fn longer_value_series_is_tolerated() {
        let mut p = payload(2);
        p.daily.weathercode.push(95);

        let text = format_forecast(&p).unwrap();
        assert_eq!(text.matches("Date: ").count(), 2);
        assert!(!text.contains("Weather Code: 95"));
    }

    #[test]
    fn current_weather_round_trips_with_two_space_indent() {
        let payload = serde_json::json!({
            "latitude": 52.52,
            "longitude": 13.41,
            "current": {
                "temperature_2m": 21.4,
                "is_day": 1,
                "weather_code": 2
            }
        });

        let text = format_current_weather(&payload).unwrap();

        let reparsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, payload);
        assert!(text.starts_with("{\n  \""));
    }
}
