use std::{
    io::{self, stdin},
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use quizling::{
    app::App,
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    content::Content,
    error::QuizError,
    feedback::{FeedbackSink, Silent, TerminalBell},
    games::{Difficulty, GameKind},
    logging,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};

const TICK_RATE_MS: u64 = 50;

/// playful learning games for small children, right in the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Counting, letters, colors, shapes, patterns, animal sounds, number words, tracing and a memory match game. Pick one from the menu or name it on the command line."
)]
pub struct Cli {
    /// game to jump straight into, the menu is shown when omitted
    #[clap(value_enum)]
    game: Option<GameKind>,

    /// number of rounds in each quiz and tracing game
    #[clap(short = 'r', long)]
    rounds: Option<u32>,

    /// how many animals the counting game may show
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// number of pairs in the memory match deck (2-12)
    #[clap(long)]
    pairs: Option<usize>,

    /// don't ring the terminal bell
    #[clap(long)]
    mute: bool,

    /// write logs here instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// remember the options given on this run for next time
    #[clap(long)]
    save_settings: bool,
}

impl Cli {
    /// Command line flags win over stored settings
    fn apply(&self, mut config: Config) -> Config {
        if let Some(rounds) = self.rounds {
            config.total_rounds = rounds;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(pairs) = self.pairs {
            config.matching_pairs = pairs;
        }
        if self.mute {
            config.sound = false;
        }
        config.sanitized()
    }
}

fn main() -> Result<(), QuizError> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = cli.log_file.clone().or_else(AppDirs::log_path) {
        logging::init(&path);
    }

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    if cli.save_settings {
        if let Err(e) = store.save(&config) {
            warn!(path = %store.path().display(), error = %e, "could not save settings");
        }
    }

    let content = Arc::new(Content::load()?);
    let feedback: Box<dyn FeedbackSink> = if config.sound {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(Silent)
    };
    let mut app = App::new(config, content, feedback);
    if let Some(kind) = cli.game {
        app.launch(kind);
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), QuizError> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    loop {
        let size = terminal.size()?;
        app.resize(size.width, size.height);
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        app.handle_event(runner.step(), Instant::now());
        if app.should_quit() {
            break;
        }
    }

    info!("quitting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["quizling"]);

        assert_eq!(cli.game, None);
        assert_eq!(cli.rounds, None);
        assert!(!cli.mute);
        assert!(!cli.save_settings);
        assert_eq!(cli.apply(Config::default()), Config::default());
    }

    #[test]
    fn test_cli_game_argument() {
        let cli = Cli::parse_from(["quizling", "matching"]);
        assert_eq!(cli.game, Some(GameKind::Matching));

        assert!(Cli::try_parse_from(["quizling", "chess"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "quizling", "counting", "-r", "5", "-d", "hard", "--pairs", "8", "--mute",
        ]);
        let config = cli.apply(Config::default());

        assert_eq!(config.total_rounds, 5);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.matching_pairs, 8);
        assert!(!config.sound);
    }

    #[test]
    fn test_cli_values_are_sanitized() {
        let cli = Cli::parse_from(["quizling", "--rounds", "0", "--pairs", "40"]);
        let config = cli.apply(Config::default());

        assert_eq!(config.total_rounds, 1);
        assert_eq!(config.matching_pairs, 12);
    }
}
