//! Host model of the division test: prints the quotient table and exits.

use divtest_rt::{console, exit, EXIT_SUCCESS};

fn main() {
    let _guard = divtest_cli::setup_logger();

    let mut out = console();
    divtest_core::run(&mut out);
    drop(out);

    tracing::debug!("quotient table printed");
    exit(EXIT_SUCCESS);
}
