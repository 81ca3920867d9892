use anyhow::{bail, Context};
use clap::Args;

use divtest_config::{Config, RunConfig, SinkKind};
use divtest_rt::EXIT_SUCCESS;
use divtest_vm::{emulate_divtest, TrapHandler};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Output path for the table. Falls back to DIVTEST_RUN_SINK, then "console".
    #[arg(long, value_enum)]
    pub sink: Option<SinkKind>,
}

pub fn handle_command(args: RunArgs) -> anyhow::Result<()> {
    let config = RunConfig::from_env().context("failed to read run configuration")?;
    let sink = args.sink.unwrap_or(config.sink);

    run_table(sink)
}

pub fn run_table(sink: SinkKind) -> anyhow::Result<()> {
    tracing::info!(%sink, "printing quotient table");

    match sink {
        SinkKind::Console => {
            let mut console = divtest_rt::console();
            divtest_core::run(&mut console);
        }
        SinkKind::Trap => {
            let mut handler = TrapHandler::new();
            handler.enable_stdout();

            let execution = emulate_divtest(handler).context("trap handler failed")?;
            tracing::debug!(traps = execution.traps, "trap handler finished");

            if execution.exit_code != EXIT_SUCCESS {
                bail!("program exited with code {}", execution.exit_code);
            }
        }
    }

    Ok(())
}
