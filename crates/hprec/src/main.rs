//! hprec: arbitrary-precision integer calculator.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use hprec_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = match config::AppConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            let code = errors::cli_exit_code(&err);
            if err.use_stderr() {
                eprint!("{}", err.render().ansi());
            } else {
                print!("{}", err.render());
            }
            return ExitCode::from(code);
        }
    };

    // RUST_LOG wins when set; otherwise warn, or debug with --verbose.
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
