use tracing::warn;

use crate::{
    model::{Coordinate, Marker, WeatherResult},
    provider::WeatherProvider,
};

/// What a call to [`AppState::submit_search`] resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// The query was blank; nothing was requested and nothing changed.
    Skipped,
    /// A result was stored; the marker now sits at this coordinate.
    Found(Coordinate),
    /// The lookup failed and the error flag is set.
    Failed,
}

/// Everything both screens read from.
///
/// `submit_search` is the only operation that touches the result, the error
/// flag and the marker.
#[derive(Debug, Default)]
pub struct AppState {
    query: String,
    result: Option<WeatherResult>,
    error: bool,
    marker: Option<Marker>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Last successful result. May be stale when [`has_error`](Self::has_error) is true.
    pub fn result(&self) -> Option<&WeatherResult> {
        self.result.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Zero markers before the first successful search, exactly one after.
    pub fn markers(&self) -> &[Marker] {
        self.marker.as_slice()
    }

    pub async fn submit_search(&mut self, provider: &dyn WeatherProvider) -> SearchOutcome {
        let city = self.query.trim().to_string();
        if city.is_empty() {
            return SearchOutcome::Skipped;
        }

        match provider.current_weather(&city).await {
            Ok(result) => {
                let coordinate = result.coordinate;

                self.result = Some(result);
                self.error = false;
                self.marker = Some(Marker::at(coordinate));
                self.query.clear();

                SearchOutcome::Found(coordinate)
            }
            Err(err) => {
                warn!(%city, error = %err, "weather lookup failed");
                self.error = true;

                SearchOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::provider::LookupError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers every lookup from a fixed table and records what it was asked.
    #[derive(Debug, Default)]
    pub(crate) struct FakeProvider {
        pub(crate) known: Vec<WeatherResult>,
        pub(crate) calls: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        pub(crate) fn knowing(results: Vec<WeatherResult>) -> Self {
            Self {
                known: results,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current_weather(&self, city: &str) -> Result<WeatherResult, LookupError> {
            self.calls.lock().unwrap().push(city.to_string());

            self.known
                .iter()
                .find(|r| r.city.eq_ignore_ascii_case(city))
                .cloned()
                .ok_or_else(|| LookupError::Parse("city not found".to_string()))
        }
    }

    pub(crate) fn paris() -> WeatherResult {
        WeatherResult {
            city: "Paris".to_string(),
            country: "FR".to_string(),
            description: "clear sky".to_string(),
            temperature_c: 18.4,
            feels_like_c: 17.9,
            humidity_pct: 60,
            wind_speed_mps: 3.1,
            visibility_m: 10000,
            pressure_hpa: 1012,
            coordinate: Coordinate { lat: 48.85, lon: 2.35 },
        }
    }

    #[tokio::test]
    async fn successful_search_stores_result_and_marker() {
        let provider = FakeProvider::knowing(vec![paris()]);
        let mut state = AppState::new();
        state.set_query("  Paris ");

        let outcome = state.submit_search(&provider).await;

        assert_eq!(outcome, SearchOutcome::Found(paris().coordinate));
        assert_eq!(state.result(), Some(&paris()));
        assert!(!state.has_error());
        assert_eq!(state.markers(), &[Marker { lat: 48.85, lon: 2.35, size: 20.0 }]);
        assert_eq!(state.query(), "");
        assert_eq!(provider.calls(), vec!["Paris".to_string()]);
    }

    #[tokio::test]
    async fn failed_search_sets_error_and_keeps_stale_result() {
        let provider = FakeProvider::knowing(vec![paris()]);
        let mut state = AppState::new();

        state.set_query("Paris");
        state.submit_search(&provider).await;

        state.set_query("Zzzznotacity");
        let outcome = state.submit_search(&provider).await;

        assert_eq!(outcome, SearchOutcome::Failed);
        assert!(state.has_error());
        assert_eq!(state.result(), Some(&paris()));
        assert_eq!(state.markers().len(), 1);
        assert_eq!(state.query(), "Zzzznotacity");
    }

    #[tokio::test]
    async fn success_after_failure_clears_error() {
        let provider = FakeProvider::knowing(vec![paris()]);
        let mut state = AppState::new();

        state.set_query("nowhere");
        state.submit_search(&provider).await;
        assert!(state.has_error());

        state.set_query("paris");
        state.submit_search(&provider).await;
        assert!(!state.has_error());
    }

    #[tokio::test]
    async fn blank_query_makes_no_request() {
        let provider = FakeProvider::knowing(vec![paris()]);
        let mut state = AppState::new();

        for blank in ["", "   ", "\t\n"] {
            state.set_query(blank);
            assert_eq!(state.submit_search(&provider).await, SearchOutcome::Skipped);
        }

        assert!(provider.calls().is_empty());
        assert!(state.result().is_none());
        assert!(!state.has_error());
        assert!(state.markers().is_empty());
    }

    #[tokio::test]
    async fn repeated_city_is_requested_again() {
        let provider = FakeProvider::knowing(vec![paris()]);
        let mut state = AppState::new();

        for _ in 0..2 {
            state.set_query("Paris");
            state.submit_search(&provider).await;
        }

        assert_eq!(provider.calls().len(), 2);
        assert_eq!(state.markers().len(), 1);
    }
}
