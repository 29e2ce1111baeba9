use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, ConfigSource};
use connect_four::console::{LineInput, TextDisplay};
use connect_four::game::GameEngine;
use connect_four::ui::App;

/// Play two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Use the interactive terminal UI instead of line prompts
    #[arg(long)]
    tui: bool,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print a configuration file with all defaults and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
        config.validate().context("invalid --log-level")?;
    }

    connect_four::logging::init(&config.logging.level);
    if source == ConfigSource::Defaults {
        tracing::warn!("config file '{}' not found, using defaults", cli.config.display());
    }
    tracing::info!(tui = cli.tui, "starting game");

    if cli.tui {
        run_tui(config).context("terminal UI failed")
    } else {
        run_console(&config)
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock(), io::stdout(), config);
    let mut display = TextDisplay::new(io::stdout(), config);

    let mut engine = GameEngine::new().with_forfeit_token(config.game.forfeit_token.clone());
    engine
        .start_game(&mut input, &mut display)
        .context("game ended without a result")?;
    Ok(())
}

fn run_tui(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
