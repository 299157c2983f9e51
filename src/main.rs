//! Showcase binary.
//!
//! Renders every pill category, the sample listings and a people table to
//! stdout, then waits for Enter.
//!
//! # Usage
//!
//! ```text
//! pillbox [key=value ...]
//!
//!   unicode=auto|true|false   force or detect rounded caps and box drawing
//!   color=auto|true|false     force or detect ANSI colors
//!   width=N                   output width (default: $COLUMNS or 80)
//!   theme=default|mono        built-in chrome theme
//!   theme_file=PATH           TOML theme file
//!   trace_level=LEVEL         log level for stderr output
//! ```
//!
//! Every key can also be set through a `PILLBOX_<KEY>` environment variable.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead};
use std::process::ExitCode;

use pillbox::{samples, Config};

fn run(config: &Config) -> pillbox::Result<()> {
    let span = tracing::debug_span!("showcase");
    let _guard = span.entered();

    let session = pillbox::initialize(config);
    let mut console = session.console(io::stdout());
    let people = samples::people();
    let today = chrono::Local::now().date_naive();

    console.window_title("Pillbox showcase")?;

    samples::category_pills(&mut console)?;
    console.line_separator()?;

    samples::decimal_examples(&mut console)?;
    console.line_separator()?;

    samples::product_examples(&mut console)?;
    console.line_separator()?;

    samples::born_between_examples(&mut console, &people)?;
    console.line_separator()?;

    samples::gender_groups(&mut console, &people, today)?;
    console.line_separator()?;

    samples::people_table(&mut console, &people)?;

    console.exit_prompt("Press Enter to exit...")?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    tracing::debug!("showcase complete");
    Ok(())
}

fn main() -> ExitCode {
    let config = match Config::from_env_and_args(|key| std::env::var(key).ok(), std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pillbox: {e}");
            return ExitCode::from(2);
        }
    };

    pillbox::observability::init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "showcase failed");
            eprintln!("pillbox: {e}");
            ExitCode::FAILURE
        }
    }
}
