//! # divtest
//!
//! Host tools for the OR1200 division test.
//!
//! `divtest-model` prints the reference quotient table and exits. `divtest`
//! can print it through either output path and check a transcript captured
//! from a simulator run:
//!
//! ```sh
//! divtest run --sink trap
//! divtest check sim-console.log
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `warn`), so
//! stdout carries nothing but the table.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;

#[derive(Debug, Parser)]
#[command(name = "divtest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: command::Command,
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}
