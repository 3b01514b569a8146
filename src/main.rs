use std::{fs::File, io, path::Path, process::ExitCode};

use anyhow::Result;
use numsort_core::{
    config::Config,
    pipeline::{self, SortOptions},
};
use tracing::Level;
use tracing_subscriber::{Registry, filter, fmt, layer::Layer, prelude::*};

const SUCCESS: u8 = 0;
const UNSORTED: u8 = 1;
const FATAL: u8 = 2;

fn log_level(args: &numsort_cli::Args) -> Level {
    let var = args
        .log_level
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::var("NUMSORT_LOG").unwrap_or_default());
    match var.to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        #[cfg(debug_assertions)]
        _ => Level::DEBUG,
        #[cfg(not(debug_assertions))]
        _ => Level::WARN,
    }
}

fn init_logging(args: &numsort_cli::Args) -> Result<()> {
    let subscriber = Registry::default().with(
        fmt::layer()
            .compact()
            .without_time()
            .with_writer(io::stderr)
            .with_filter(filter::LevelFilter::from_level(log_level(args))),
    );
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn init_config(path: &Path, overwrite: bool) -> Result<u8> {
    Config::create_config_at(path, overwrite)?;
    eprintln!("Created default config at: `{}`", path.to_string_lossy());
    Ok(SUCCESS)
}

fn run(args: &numsort_cli::Args) -> Result<u8> {
    let config = Config::load_from_location(Config::get_default_location())?;
    let mut options = SortOptions::from_config(&config);
    options.reverse |= args.reverse;
    options.unique |= args.unique;
    options.parallel |= args.parallel;
    tracing::info!("{options:?}");

    let mut lines = pipeline::read_lines(&args.files)?;

    if args.check {
        if let Some(index) = options.find_disorder(&lines) {
            eprintln!("numsort: disorder at line {}: {}", index + 1, lines[index]);
            return Ok(UNSORTED);
        }
        return Ok(SUCCESS);
    }

    options.sort(&mut lines);

    match &args.output {
        Some(path) => pipeline::write_lines(File::create(path)?, &lines)?,
        None => pipeline::write_lines(io::stdout().lock(), &lines)?,
    }

    Ok(SUCCESS)
}

/// Every failure ends up here so that only `--check` can exit with 1.
fn exit_status(result: Result<u8>) -> u8 {
    match result {
        Ok(status) => status,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("numsort: {err}");
            FATAL
        }
    }
}

fn main() -> ExitCode {
    let args = numsort_cli::parse();

    let status = if args.init {
        exit_status(
            Config::get_default_location().and_then(|path| init_config(&path, args.overwrite)),
        )
    } else {
        exit_status(init_logging(&args).and_then(|()| run(&args)))
    };

    ExitCode::from(status)
}
