//! Wargame CLI - play container-backed challenge levels

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use wargame::cli::Args;
use wargame::output::{completion_banner, section_header};
use wargame::repl::Tone;
use wargame::setup::{needs_setup, run_setup, Preflight};
use wargame::{
    format_output, load_or_create_identity, Config, Console, ContainerManager, Identity, InterruptFlag,
    OutputFormat, PrintConsole, ProgressionController, RunOutcome, StateStore, StatusReport,
    TerminalConsole, WargameError, TOTAL_LEVELS,
};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .init();
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = Config::from_args(&args)?;
    log::debug!("Using state directory {}", config.state_dir.display());

    let mut store = config.state_store();

    if args.status {
        let report = StatusReport::from_store(&store, &config.state_dir);
        let format = if args.json { OutputFormat::Json } else { OutputFormat::Human };
        println!("{}", format_output(&report, &format));
        return Ok(ExitCode::SUCCESS);
    }

    let containers = ContainerManager::with_repository(config.engine(), &config.image_repository);

    if args.reset {
        let mut console = PrintConsole;
        for line in section_header("Resetting User") {
            console.say(Tone::Heading, &line);
        }
        let mut controller = ProgressionController::new(store, containers);
        if !controller.reset_existing(&mut console) {
            console.error("No user found to reset.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let interrupts = InterruptFlag::install()?;
    let mut console = TerminalConsole::new(interrupts.clone())?;

    if needs_setup(&store) && !config.skip_setup {
        let preflight = Preflight::probe(&config.connectivity_host);
        if let Err(e) = run_setup(&preflight, &containers, TOTAL_LEVELS, &mut console, &interrupts) {
            log::debug!("Setup aborted: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    }

    let identity = match load_or_create_identity(&mut store, &mut console) {
        Ok(identity) => identity,
        Err(WargameError::Interrupted | WargameError::InputClosed) => {
            console.warn("No username entered. Goodbye!");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(e).context("could not set up a username"),
    };
    match &identity {
        Identity::Returning(name) => console.warn(&format!("Welcome back, {}!", name)),
        Identity::Created(name) => console.warn(&format!("Your username is set to {}.", name)),
    }
    let user = identity.name();

    console.success(&format!("Welcome, {}!", user));
    console.info(&format!("Current Level: {}/{}", store.load_level(), TOTAL_LEVELS));
    console.plain("");

    let mut controller = ProgressionController::new(store, containers);
    match controller.run(user, &mut console)? {
        RunOutcome::Completed => {
            console.clear();
            for line in completion_banner(TOTAL_LEVELS) {
                console.success(&line);
            }
        }
        RunOutcome::Paused { level } => {
            log::info!("Paused at level {}", level);
            console.warn(&format!("See you next time, {}!", user));
        }
        RunOutcome::Deleted => {
            console.error("User deleted! Goodbye!");
        }
    }

    Ok(ExitCode::SUCCESS)
}
