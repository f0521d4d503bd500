use std::fmt;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Search,
    Result,
}

#[derive(Debug, Error, PartialEq)]
#[error("no screen is mounted at '{0}'")]
pub struct UnknownPath(pub String);

impl Screen {
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Search => "/",
            Screen::Result => "/weather",
        }
    }

    pub fn from_path(path: &str) -> Result<Self, UnknownPath> {
        match path {
            "/" => Ok(Screen::Search),
            "/weather" => Ok(Screen::Result),
            other => Err(UnknownPath(other.to_string())),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Which of the two screens is showing. Starts on [`Screen::Search`].
#[derive(Debug, Default)]
pub struct Router {
    current: Screen,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn navigate(&mut self, screen: Screen) {
        if self.current != screen {
            info!(from = %self.current, to = %screen, "navigating");
        }
        self.current = screen;
    }

    pub fn navigate_path(&mut self, path: &str) -> Result<(), UnknownPath> {
        let screen = Screen::from_path(path)?;
        self.navigate(screen);
        Ok(())
    }

    pub fn back(&mut self) {
        self.navigate(Screen::Search);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_search() {
        assert_eq!(Router::new().current(), Screen::Search);
    }

    #[test]
    fn paths_map_to_screens() {
        assert_eq!(Screen::from_path("/"), Ok(Screen::Search));
        assert_eq!(Screen::from_path("/weather"), Ok(Screen::Result));
        assert_eq!(Screen::Result.path(), "/weather");
    }

    #[test]
    fn unknown_path_is_rejected_without_moving() {
        let mut router = Router::new();

        let err = router.navigate_path("/forecast").unwrap_err();

        assert_eq!(err, UnknownPath("/forecast".to_string()));
        assert_eq!(router.current(), Screen::Search);
    }

    #[test]
    fn oscillates_between_screens() {
        let mut router = Router::new();

        router.navigate_path("/weather").unwrap();
        assert_eq!(router.current(), Screen::Result);

        router.back();
        assert_eq!(router.current(), Screen::Search);

        router.navigate(Screen::Result);
        assert_eq!(router.current(), Screen::Result);
    }
}
