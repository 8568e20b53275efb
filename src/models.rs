use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Open-Meteo API Models
// ============================================================================

/// Subset of the Open-Meteo forecast response the forecast tool reads.
/// Everything else in the body (hourly series, units, metadata) is ignored.
#[derive(Debug, Deserialize)]
pub struct ForecastPayload {
    pub daily: DailySeries,
}

/// Parallel per-day series, index-aligned on `time`.
#[derive(Debug, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub weathercode: Vec<i32>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCurrentWeatherRequest {
    pub latitude: f64,
    pub longitude: f64,
}
