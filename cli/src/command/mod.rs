use clap::Subcommand;

pub mod check;
pub mod run;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the quotient table to stdout.
    Run(run::RunArgs),
    /// Compare a captured transcript against the quotient table.
    Check(check::CheckArgs),
}

pub fn handle_command(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Run(args) => run::handle_command(args),
        Command::Check(args) => check::handle_command(args),
    }
}
