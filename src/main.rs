//! Gomoku GUI
//!
//! Two players share one board. Launch arguments pick the board size and
//! win length:
//!
//! ```text
//! gomoku                  19x19, five to win
//! gomoku WIN              custom win length
//! gomoku ROWS COLS        custom board size
//! gomoku WIN ROWS COLS    both
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gomoku::ui::GomokuApp;
use gomoku::{GameConfig, GameSession, RuleSet};

/// Two-player five-in-a-row with double-four and double-three restrictions.
#[derive(Parser)]
#[command(name = "gomoku", about = "Two-player Gomoku")]
struct Cli {
    /// Up to three integers: [WIN] | [ROWS COLS] | [WIN ROWS COLS]
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Allow moves that make two fours at once
    #[arg(long)]
    no_double_four: bool,

    /// Allow moves that make two open threes at once
    #[arg(long)]
    no_double_three: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let rules = RuleSet {
        double_four: !cli.no_double_four,
        double_three: !cli.no_double_three,
    };
    let session = match GameConfig::from_args(cli.values.as_slice())
        .and_then(|config| GameSession::new(config.with_rules(rules)))
    {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "invalid configuration");
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = *session.config();

    info!(
        rows = config.rows,
        cols = config.cols,
        num_win = config.num_win,
        "starting Gomoku"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, session)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "GUI exited with an error");
            ExitCode::FAILURE
        }
    }
}
