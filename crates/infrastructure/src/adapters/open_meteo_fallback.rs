//! Fallback forecasts computed directly from Open-Meteo
//!
//! Implements [`FallbackForecastPort`] by issuing one batched forecast request
//! per resource and handing the body to `integration_weather` for ranking.

use std::sync::Arc;

use application::{
    error::FetchError,
    ports::{Clock, FallbackForecastPort},
    services::FetchClient,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::Tz;
use domain::entities::{SnowLocation, SnowResponse, SunshineLocation, SunshineResponse};
use integration_weather::{
    FORECAST_PATH, LocationSeries, OneOrMany, WeekWindow, WeekendWindow, default_snow_locations,
    default_sunshine_locations, snow_query, snow_response, sunshine_query, sunshine_response,
    today_in,
};
use tracing::{debug, instrument};

/// Open-Meteo backed fallback provider
pub struct OpenMeteoFallbackAdapter {
    client: FetchClient,
    timezone: Tz,
    sunshine_locations: Vec<SunshineLocation>,
    snow_locations: Vec<SnowLocation>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for OpenMeteoFallbackAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenMeteoFallbackAdapter")
            .field("base_url", &self.client.base_url())
            .field("timezone", &self.timezone.name())
            .field("sunshine_locations", &self.sunshine_locations.len())
            .field("snow_locations", &self.snow_locations.len())
            .finish_non_exhaustive()
    }
}

impl OpenMeteoFallbackAdapter {
    /// Adapter over the built-in destination and resort catalogs
    pub fn new(client: FetchClient, timezone: Tz, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            timezone,
            sunshine_locations: default_sunshine_locations(),
            snow_locations: default_snow_locations(),
            clock,
        }
    }

    /// Replace the catalogs
    #[must_use]
    pub fn with_locations(
        mut self,
        sunshine_locations: Vec<SunshineLocation>,
        snow_locations: Vec<SnowLocation>,
    ) -> Self {
        self.sunshine_locations = sunshine_locations;
        self.snow_locations = snow_locations;
        self
    }

    fn today(&self) -> NaiveDate {
        today_in(self.timezone, self.clock.now())
    }
}

#[async_trait]
impl FallbackForecastPort for OpenMeteoFallbackAdapter {
    #[instrument(skip(self))]
    async fn sunshine(&self) -> Result<SunshineResponse, FetchError> {
        if self.sunshine_locations.is_empty() {
            return Err(FetchError::InvalidData(
                "no sunshine destinations configured".into(),
            ));
        }

        let window = WeekendWindow::containing_or_after(self.today())?;
        let query = sunshine_query(&self.sunshine_locations, &window, self.timezone.name());
        debug!(start = %window.friday, locations = self.sunshine_locations.len(), "Fetching sunshine fallback");

        let body: OneOrMany<LocationSeries> = self.client.fetch(FORECAST_PATH, &query).await?;
        Ok(sunshine_response(
            &self.sunshine_locations,
            body,
            &window,
            self.clock.now(),
        ))
    }

    #[instrument(skip(self))]
    async fn snow(&self) -> Result<SnowResponse, FetchError> {
        if self.snow_locations.is_empty() {
            return Err(FetchError::InvalidData("no ski resorts configured".into()));
        }

        let window = WeekWindow::containing(self.today())?;
        let query = snow_query(&self.snow_locations, &window, self.timezone.name());
        debug!(start = %window.monday, locations = self.snow_locations.len(), "Fetching snow fallback");

        let body: OneOrMany<LocationSeries> = self.client.fetch(FORECAST_PATH, &query).await?;
        Ok(snow_response(
            &self.snow_locations,
            body,
            &window,
            self.clock.now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::{
        RetryPolicy,
        ports::{HttpResponse, HttpTransport, ManualClock},
    };
    use chrono::{DateTime, Utc};
    use parking_lot::Mutex;
    use url::Url;

    /// Answers every request with the same body and remembers the URLs
    #[derive(Debug, Default)]
    struct FixedTransport {
        body: String,
        seen: Mutex<Vec<Url>>,
    }

    #[async_trait]
    impl HttpTransport for FixedTransport {
        async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
            self.seen.lock().push(url.clone());
            Ok(HttpResponse::new(200, self.body.clone()))
        }
    }

    // Wednesday 2026-10-14 12:00 UTC
    fn wednesday() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-14T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn adapter(body: &str) -> (Arc<FixedTransport>, OpenMeteoFallbackAdapter) {
        let transport = Arc::new(FixedTransport {
            body: body.to_string(),
            ..FixedTransport::default()
        });
        let client = FetchClient::new(
            transport.clone(),
            "https://api.open-meteo.com/v1",
            RetryPolicy::single_attempt(),
        );
        let clock = Arc::new(ManualClock::new(wednesday()));
        let sunshine = vec![
            SunshineLocation::new("zurich", "Zurich", "ZH", 47.37, 8.54, 0)
                .unwrap()
                .as_baseline(),
            SunshineLocation::new("lugano", "Lugano", "TI", 46.0, 8.95, 150).unwrap(),
        ];
        let snow = vec![SnowLocation::new("laax", "Laax", "GR", 46.8, 9.26, 1100).unwrap()];
        let adapter = OpenMeteoFallbackAdapter::new(client, chrono_tz::Europe::Zurich, clock)
            .with_locations(sunshine, snow);
        (transport, adapter)
    }

    fn query_value(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    const SUNSHINE_BODY: &str = r#"[
        {"latitude":47.37,"longitude":8.54,"daily":{
            "time":["2026-10-16","2026-10-17","2026-10-18"],
            "weather_code":[3,3,3],
            "temperature_2m_max":[14.0,13.0,12.0],
            "temperature_2m_min":[6.0,5.0,4.0],
            "sunshine_duration":[3600.0,7200.0,0.0],
            "precipitation_sum":[0.0,0.0,1.0]}},
        {"latitude":46.0,"longitude":8.95,"daily":{
            "time":["2026-10-16","2026-10-17","2026-10-18"],
            "weather_code":[0,0,1],
            "temperature_2m_max":[19.0,20.0,18.0],
            "temperature_2m_min":[10.0,11.0,9.0],
            "sunshine_duration":[36000.0,36000.0,18000.0],
            "precipitation_sum":[0.0,0.0,0.0]}}
    ]"#;

    #[tokio::test]
    async fn sunshine_requests_upcoming_weekend_in_zurich_time() {
        let (transport, adapter) = adapter(SUNSHINE_BODY);
        let response = adapter.sunshine().await.unwrap();

        let seen = transport.seen.lock();
        assert_eq!(seen.len(), 1);
        let url = &seen[0];
        assert_eq!(url.path(), "/v1/forecast");
        assert_eq!(query_value(url, "start_date").as_deref(), Some("2026-10-16"));
        assert_eq!(query_value(url, "end_date").as_deref(), Some("2026-10-18"));
        assert_eq!(query_value(url, "timezone").as_deref(), Some("Europe/Zurich"));

        assert_eq!(response.destinations.len(), 2);
        assert!(response.destinations[0].is_baseline);
        assert_eq!(response.destinations[1].id, "lugano");
        assert_eq!(response.timestamp, wednesday());
    }

    #[tokio::test]
    async fn snow_requests_current_week_with_hourly_depth() {
        let body = r#"{"latitude":46.8,"longitude":9.26,
            "daily":{"time":["2026-10-12"],"weather_code":[71],
                "temperature_2m_max":[1.0],"temperature_2m_min":[-5.0],"snowfall_sum":[8.5]},
            "hourly":{"time":["2026-10-12T00:00"],"snow_depth":[0.25]}}"#;
        let (transport, adapter) = adapter(body);
        let response = adapter.snow().await.unwrap();

        let url = transport.seen.lock()[0].clone();
        assert_eq!(query_value(&url, "start_date").as_deref(), Some("2026-10-12"));
        assert_eq!(query_value(&url, "end_date").as_deref(), Some("2026-10-18"));
        assert_eq!(query_value(&url, "hourly").as_deref(), Some("snow_depth"));

        assert_eq!(response.resorts.len(), 1);
        assert_eq!(response.resorts[0].snow_depth_cm, Some(25.0));
    }

    #[tokio::test]
    async fn empty_catalog_is_invalid_data() {
        let (transport, adapter) = adapter("[]");
        let adapter = adapter.with_locations(Vec::new(), Vec::new());

        assert!(matches!(
            adapter.sunshine().await,
            Err(FetchError::InvalidData(_))
        ));
        assert!(matches!(adapter.snow().await, Err(FetchError::InvalidData(_))));
        assert!(transport.seen.lock().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_decoding_error() {
        let (_transport, adapter) = adapter("{\"error\": true, \"reason\": 42");
        assert!(matches!(
            adapter.sunshine().await,
            Err(FetchError::Decoding(_))
        ));
    }
}
