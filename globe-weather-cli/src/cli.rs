use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use globe_weather_core::{
    App, Config, ResultView, Screen, SearchOutcome, provider_from_config, view::NOT_FOUND_MESSAGE,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use tracing::info;

use crate::terminal_globe::TerminalGlobe;

const QUIT_ACTION: &str = "Quit";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "globe-weather", version, about = "Know Your Weather, on a globe")]
pub struct Cli {
    /// Defaults to an interactive session.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search cities interactively.
    Run,

    /// Show current weather for a single city and exit.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Store the OpenWeather API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command.unwrap_or(Command::Run) {
            Command::Run => {
                let mut app = build_app()?;
                session(&mut app).await
            }
            Command::Show { city } => {
                let mut app = build_app()?;
                show(&mut app, city).await
            }
            Command::Configure => configure(),
        }
    }
}

fn build_app() -> Result<App<TerminalGlobe>> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    Ok(App::new(provider, TerminalGlobe::new()))
}

async fn session(app: &mut App<TerminalGlobe>) -> Result<()> {
    loop {
        print!("{}", app.globe_mut().engine_mut().render());

        match app.screen() {
            Screen::Search => {
                let view = app.search_view();
                println!("{view}");

                let prompt = Text::new(view.action)
                    .with_placeholder(view.placeholder)
                    .with_initial_value(&view.query)
                    .prompt();

                let Some(query) = interruptible(prompt)? else {
                    return Ok(());
                };

                app.set_query(query);
                app.search().await;
            }
            Screen::Result => {
                let view = app.result_view();
                println!("{view}");

                let Some(back) = view.back_action() else {
                    app.back();
                    continue;
                };

                let choice = Select::new("", vec![back, QUIT_ACTION]).prompt();
                match interruptible(choice)? {
                    Some(action) if action == back => app.back(),
                    _ => return Ok(()),
                }
            }
        }
    }
}

async fn show(app: &mut App<TerminalGlobe>, city: String) -> Result<()> {
    app.set_query(city);

    match app.search().await {
        SearchOutcome::Skipped => bail!("City name must not be empty"),
        SearchOutcome::Failed => bail!(NOT_FOUND_MESSAGE),
        SearchOutcome::Found(_) => {
            print!("{}", app.globe_mut().engine_mut().render());
            if let ResultView::Weather(card) = app.result_view() {
                print!("{card}");
            }
            Ok(())
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "saved configuration");
    println!("API key saved to {}", path.display());

    Ok(())
}

/// Treats Esc and Ctrl-C as "leave the session".
fn interruptible<T>(answer: Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read input"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["globe-weather"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_takes_a_city() {
        let cli = Cli::try_parse_from(["globe-weather", "show", "New York"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Show { city }) if city == "New York"));
    }

    #[test]
    fn cancel_ends_the_session_quietly() {
        let answer: Result<String, InquireError> = Err(InquireError::OperationCanceled);
        assert!(interruptible(answer).unwrap().is_none());

        let answer: Result<String, InquireError> = Ok("Paris".into());
        assert_eq!(interruptible(answer).unwrap().as_deref(), Some("Paris"));
    }
}
