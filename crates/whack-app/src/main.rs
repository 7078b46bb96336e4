use std::io::{self, BufRead};
use std::process::ExitCode;

use whack_app::cli::{CliArgs, USAGE};
use whack_app::config::AppConfig;
use whack_app::error::AppError;
use whack_app::ipc::{self, JsonLineSink};
use whack_app::state::AppState;
use whack_sim::settings::JsonFileStore;
use whack_sim::GameLoop;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(msg)) => {
            eprintln!("{msg}\n\n{USAGE}");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        eprint!("{USAGE}");
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(store) = args.store {
        config.store_path = store;
    }
    if args.seed.is_some() {
        config.game.seed = args.seed;
    }

    let store = JsonFileStore::new(&config.store_path);
    log::info!("settings store at {}", store.path().display());
    let engine = GameLoop::new(config.game.clone(), Box::new(store));

    let state = AppState::new();
    ipc::start_game_loop(
        &state,
        engine,
        Box::new(JsonLineSink::new(io::stdout())),
        config.tick_duration(),
    )?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match ipc::parse_command(&line) {
            Ok(command) => ipc::send_command(&state, command)?,
            Err(e) => log::warn!("skipping input line: {e}"),
        }
    }

    ipc::stop_game_loop(&state)
}
