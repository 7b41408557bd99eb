use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use connect_four::config::AppConfig;
use connect_four::game::{GameStatus, WinScan};
use connect_four::ui::App;
use connect_four::{logging, replay};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Replay comma-separated 0-based columns without the UI, e.g. "3,3,4"
    #[arg(long, allow_hyphen_values = true)]
    moves: Option<String>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Override the win detection strategy
    #[arg(long, value_enum)]
    win_scan: Option<ScanArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScanArg {
    FullBoard,
    LastMove,
}

impl From<ScanArg> for WinScan {
    fn from(arg: ScanArg) -> Self {
        match arg {
            ScanArg::FullBoard => WinScan::FullBoard,
            ScanArg::LastMove => WinScan::LastMove,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let loaded = AppConfig::load_optional(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let config_found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if let Some(scan) = cli.win_scan {
        config.game.win_scan = scan.into();
    }
    logging::init(&config.logging).context("setting up logging")?;
    if !config_found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    match cli.moves {
        Some(moves) => run_replay(&moves, config.game.win_scan),
        None => run_tui(&config).context("terminal UI failed"),
    }
}

fn run_replay(moves: &str, win_scan: WinScan) -> Result<()> {
    let moves = replay::parse_moves(moves)?;
    let (engine, log) = replay::replay(&moves, win_scan);
    for line in log {
        println!("{line}");
    }
    println!();
    println!("{}", engine.grid());
    println!();
    match engine.status() {
        GameStatus::InProgress => println!("{} to move", engine.current_player()),
        GameStatus::Won(player) => println!("{player} won!"),
        GameStatus::Tied => println!("This match is a tie"),
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
