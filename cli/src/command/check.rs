use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Args;

use divtest_core::{Sink, Verifier};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Transcript to check, or "-" to read stdin.
    pub path: PathBuf,
}

pub fn handle_command(args: CheckArgs) -> anyhow::Result<()> {
    let CheckArgs { path } = args;
    let name = path.display().to_string();

    let reader: Box<dyn Read> = if path.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(&path).with_context(|| format!("failed to open {name}"))?)
    };

    let verifier = check_transcript(reader).with_context(|| format!("failed to read {name}"))?;
    let summary = verifier
        .finish()
        .with_context(|| format!("{name} does not match the quotient table"))?;

    tracing::info!(lines = summary.lines, "transcript verified");
    println!("{name}: {} lines match", summary.lines);

    Ok(())
}

/// Streams `reader` through a [`Verifier`], stopping at the first mismatch.
pub fn check_transcript<R: Read>(mut reader: R) -> io::Result<Verifier> {
    let mut verifier = Verifier::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        verifier.puts(&buf[..n]);
        if verifier.error().is_some() {
            break;
        }
    }

    Ok(verifier)
}
