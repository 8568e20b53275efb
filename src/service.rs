use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::Deserialize;
use serde_json::Value;

use crate::constants::{
    CURRENT_WEATHER_VARIABLES, FORECAST_DAILY_VARIABLES, FORECAST_HOURLY_VARIABLES,
    OPEN_METEO_API_BASE, REQUEST_TIMEOUT, USER_AGENT,
};
use crate::error::FetchError;
use crate::formatters::{
    format_current_weather, format_forecast, CURRENT_WEATHER_UNAVAILABLE, FORECAST_UNAVAILABLE,
};
use crate::models::{ForecastPayload, GetCurrentWeatherRequest, GetForecastRequest};

/// Builds the forecast endpoint URL for a location
fn forecast_url(base: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "{}/forecast?latitude={}&longitude={}&hourly={}&daily={}&timezone=auto",
        base, latitude, longitude, FORECAST_HOURLY_VARIABLES, FORECAST_DAILY_VARIABLES
    )
}

/// Builds the current weather endpoint URL for a location
fn current_weather_url(base: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "{}/forecast?latitude={}&longitude={}&current={}",
        base, latitude, longitude, CURRENT_WEATHER_VARIABLES
    )
}

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: Arc<Client>,
    base_url: String,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new() -> Result<Self> {
        Self::with_endpoint(OPEN_METEO_API_BASE.to_string(), REQUEST_TIMEOUT)
    }

    /// Creates a service talking to a specific endpoint. Tests use this to
    /// point the client at a local fixture server.
    fn with_endpoint(base_url: String, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url,
            tool_router: Self::tool_router(),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response.
    ///
    /// One attempt only. 2xx and 3xx responses count as success (redirects
    /// are followed by the client before the status check); everything else
    /// becomes a [`FetchError`].
    async fn make_request<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status(status));
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Fetches and renders the forecast, collapsing fetch failures into the
    /// fixed fallback text
    async fn forecast_text(&self, request: GetForecastRequest) -> Result<String, McpError> {
        let url = forecast_url(&self.base_url, request.latitude, request.longitude);

        match self.make_request::<ForecastPayload>(&url).await {
            Ok(payload) => format_forecast(&payload).map_err(|e| {
                McpError::internal_error(format!("Malformed forecast payload: {}", e), None)
            }),
            Err(e) => {
                tracing::warn!("Forecast request failed: {}", e);
                Ok(FORECAST_UNAVAILABLE.to_string())
            }
        }
    }

    /// Fetches and renders current weather, collapsing fetch failures into
    /// the fixed fallback text
    async fn current_weather_text(
        &self,
        request: GetCurrentWeatherRequest,
    ) -> Result<String, McpError> {
        let url = current_weather_url(&self.base_url, request.latitude, request.longitude);

        match self.make_request::<Value>(&url).await {
            Ok(payload) => format_current_weather(&payload).map_err(|e| {
                McpError::internal_error(format!("Failed to serialize payload: {}", e), None)
            }),
            Err(e) => {
                tracing::warn!("Current weather request failed: {}", e);
                Ok(CURRENT_WEATHER_UNAVAILABLE.to_string())
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "open-meteo-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the Open-Meteo API. \
                Provides daily forecasts and current conditions for any location \
                given as latitude/longitude coordinates."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets the daily weather forecast for a location
    #[tool(description = "Get the daily weather forecast for a location. Provide latitude and longitude (e.g., latitude: 52.52, longitude: 13.41 for Berlin).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self.forecast_text(request).await?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets current weather conditions for a location
    #[tool(description = "Get current weather conditions for a location as JSON. Provide latitude and longitude (e.g., latitude: 52.52, longitude: 13.41 for Berlin).")]
    async fn get_current_weather(
        &self,
        Parameters(request): Parameters<GetCurrentWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting current weather for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self.current_weather_text(request).await?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
