// wrapgen CLI entry point
use anyhow::Result;
use clap::Parser;
use wrapgen_cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
