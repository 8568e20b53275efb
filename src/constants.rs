use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Upper bound on a single upstream request, from connect through body read
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Hourly variables requested with every forecast call
pub const FORECAST_HOURLY_VARIABLES: &str = "temperature_2m,precipitation,weathercode";

/// Daily variables requested with every forecast call
pub const FORECAST_DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode";

/// Current weather variables requested with every current weather call
pub const CURRENT_WEATHER_VARIABLES: &str = "temperature_2m,is_day,showers,cloud_cover,\
wind_speed_10m,wind_direction_10m,pressure_msl,snowfall,precipitation,\
relative_humidity_2m,apparent_temperature,rain,weather_code,surface_pressure,\
wind_gusts_10m";
