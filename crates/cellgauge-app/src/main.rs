use std::{backtrace::Backtrace, panic, path::PathBuf, process};

use cellgauge_core::config::get_config;
use cellgauge_gui::{App, get_log_spec};
use clap::Parser;
use flexi_logger::{
    Age, Cleanup, Criterion, Duplicate, FileSpec, LogSpecBuilder, Logger, LoggerHandle, Naming,
};
use iced::Size;
use log::{LevelFilter, debug, error, info};

const LOG_DIRECTORY: &str = "/tmp/cellgauge";
const LOG_FILES_KEPT: usize = 7;
const WINDOW_SIZE: Size = Size {
    width:  800.0,
    height: 400.0,
};

/// Segmented battery indicator demo.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file to load instead of the default location.
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,
}

/// Logs at `info` into daily files under [`LOG_DIRECTORY`], mirrored to
/// stdout, until the config supplies the real level.
fn start_logger() -> LoggerHandle {
    let spec = LogSpecBuilder::new().default(LevelFilter::Info).build();

    Logger::with(spec)
        .log_to_file(FileSpec::default().directory(LOG_DIRECTORY))
        .duplicate_to_stdout(Duplicate::All)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(LOG_FILES_KEPT),
        )
        .start()
        .unwrap_or_else(|err| {
            eprintln!("cellgauge: cannot start logging to {LOG_DIRECTORY}: {err}");
            process::exit(1);
        })
}

fn log_panics() {
    panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::capture();
        error!("Panic: {info}\n{backtrace}");
    }));
}

#[tokio::main]
async fn main() -> iced::Result {
    let args = Args::parse();
    let logger = start_logger();
    log_panics();
    debug!("parsed arguments: {args:?}");

    let (config, config_path) = match get_config(args.config_path) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!("Failed to load config: {err}");
            process::exit(1);
        }
    };
    info!("using config {config_path:?} at log level {}", config.log_level);

    logger.set_new_spec(get_log_spec(&config.log_level));

    iced::application(move || App::new(config.clone())(), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(WINDOW_SIZE)
        .resizable(false)
        .antialiasing(true)
        .run()
}
