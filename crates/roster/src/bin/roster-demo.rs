//! Prints the menu and runs the scripted demonstration on stdout.
//!
//! Log output goes to stderr; set `RUST_LOG=roster=debug` to see each call.

use std::io::{self, Write};

use roster::{demo, Roster};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", demo::MENU)?;

    let mut roster = Roster::new();
    demo::run_demo(&mut roster, &mut out)?;
    tracing::info!(students = roster.len(), "demo finished");

    out.flush()?;
    Ok(())
}
