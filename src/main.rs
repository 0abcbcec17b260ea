use std::fs::File;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grid_snake::config::{DEFAULT_TICK_INTERVAL_MS, LOG_LEVEL, Settings};
use grid_snake::error::Result;
use grid_snake::game::GameState;
use grid_snake::game_loop::{self, LoopExit};
use grid_snake::input::TerminalKeys;
use grid_snake::renderer;
use grid_snake::terminal_runtime::{TerminalScreen, restore_terminal};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Field width in cells.
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Field height in cells.
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Write debug logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let settings = Settings::new(cli.width, cli.height, cli.seed, cli.tick_ms, cli.log_file)?;
    init_logging(&settings)?;
    log::info!(
        "starting {}x{} field, seed {:?}, tick {:?}",
        settings.field.width(),
        settings.field.height(),
        settings.seed,
        settings.tick_interval
    );

    install_panic_hook();

    let exit = run(&settings)?;

    // The alternate screen is gone; repeat the last frame on the normal one.
    for line in renderer::frame_lines(exit.state()) {
        println!("{line}");
    }

    Ok(())
}

fn run(settings: &Settings) -> Result<LoopExit> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let state = GameState::new(settings.field, &mut rng);

    let mut screen = TerminalScreen::open()?;
    let mut keys = TerminalKeys;

    game_loop::run(
        state,
        &mut keys,
        &mut screen,
        &mut rng,
        settings.tick_interval,
    )
}

fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };

    WriteLogger::init(LOG_LEVEL, Config::default(), File::create(path)?)?;
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
