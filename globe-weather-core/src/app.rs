use crate::{
    globe::{GlobeAdapter, GlobeEngine},
    provider::WeatherProvider,
    router::{Router, Screen},
    state::{AppState, SearchOutcome},
    view::{ResultView, SearchView},
};

/// Wires the state, the globe and the router together.
///
/// The state decides what a search resolved to; this type decides where the
/// user goes next and what the globe does about it.
#[derive(Debug)]
pub struct App<E: GlobeEngine> {
    state: AppState,
    router: Router,
    globe: GlobeAdapter<E>,
    provider: Box<dyn WeatherProvider>,
}

impl<E: GlobeEngine> App<E> {
    pub fn new(provider: Box<dyn WeatherProvider>, engine: E) -> Self {
        Self {
            state: AppState::new(),
            router: Router::new(),
            globe: GlobeAdapter::new(engine),
            provider,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn globe(&self) -> &GlobeAdapter<E> {
        &self.globe
    }

    pub fn globe_mut(&mut self) -> &mut GlobeAdapter<E> {
        &mut self.globe
    }

    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    /// Runs one search and moves to the result screen unless the query was blank.
    pub async fn search(&mut self) -> SearchOutcome {
        let outcome = self.state.submit_search(self.provider.as_ref()).await;

        match outcome {
            SearchOutcome::Skipped => {}
            SearchOutcome::Found(coordinate) => {
                self.globe.focus_on(coordinate);
                self.router.navigate(Screen::Result);
            }
            SearchOutcome::Failed => self.router.navigate(Screen::Result),
        }

        outcome
    }

    pub fn back(&mut self) {
        self.router.back();
    }

    pub fn search_view(&self) -> SearchView {
        SearchView::from_state(&self.state)
    }

    pub fn result_view(&self) -> ResultView {
        ResultView::from_state(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        globe::{CameraState, tests::RecordingEngine},
        state::tests::{FakeProvider, paris},
        view::NOT_FOUND_MESSAGE,
    };

    fn app() -> App<RecordingEngine> {
        App::new(
            Box::new(FakeProvider::knowing(vec![paris()])),
            RecordingEngine::default(),
        )
    }

    #[tokio::test]
    async fn found_city_focuses_globe_and_shows_result() {
        let mut app = app();
        app.set_query("Paris");

        let outcome = app.search().await;

        assert_eq!(outcome, SearchOutcome::Found(paris().coordinate));
        assert_eq!(app.screen(), Screen::Result);
        assert!(matches!(app.globe().camera(), CameraState::Focused(pov)
            if pov.target == Some(paris().coordinate)));
        assert!(matches!(app.result_view(), ResultView::Weather(_)));
    }

    #[tokio::test]
    async fn unknown_city_shows_error_and_leaves_globe_idle() {
        let mut app = app();
        app.set_query("Zzzznotacity");
        let calls_before = app.globe().engine().calls.len();

        let outcome = app.search().await;

        assert_eq!(outcome, SearchOutcome::Failed);
        assert_eq!(app.screen(), Screen::Result);
        assert_eq!(app.globe().camera(), CameraState::Idle);
        assert_eq!(app.globe().engine().calls.len(), calls_before);

        let view = app.result_view();
        assert_eq!(view.to_string().trim_end(), NOT_FOUND_MESSAGE);

        app.back();
        assert_eq!(app.screen(), Screen::Search);
    }

    #[tokio::test]
    async fn blank_query_stays_on_search() {
        let mut app = app();
        app.set_query("   ");

        assert_eq!(app.search().await, SearchOutcome::Skipped);
        assert_eq!(app.screen(), Screen::Search);
        assert_eq!(app.globe().camera(), CameraState::Idle);
    }

    #[tokio::test]
    async fn going_back_keeps_stored_result() {
        let mut app = app();
        app.set_query("Paris");
        app.search().await;

        app.back();

        assert_eq!(app.screen(), Screen::Search);
        assert_eq!(app.state().result(), Some(&paris()));
        assert!(!app.state().has_error());
        assert_eq!(app.search_view().query, "");
    }

    #[tokio::test]
    async fn globe_stays_focused_after_a_later_failure() {
        let mut app = app();
        app.set_query("Paris");
        app.search().await;
        app.back();
        app.set_query("Zzzznotacity");
        app.search().await;

        assert!(matches!(app.globe().camera(), CameraState::Focused(_)));
        assert!(app.state().has_error());
    }
}
