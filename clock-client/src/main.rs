// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Clock module CLI: builds the governance proposals editing the list of
//! contracts called at each block, and inspects a params snapshot.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]
use crate::cmds::Command;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cmds;
mod settings;

#[cfg(test)]
pub mod tests;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
    /// Enable a mode where output is serialized as JSON
    #[arg(short = 'j', long = "json", global = true)]
    json: bool,
}

#[derive(Serialize)]
struct JsonError {
    error: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command.run(&settings::SETTINGS) {
        Ok(output) => {
            if args.json {
                println!("{}", output.to_json()?);
            } else {
                output.pretty_print();
            }
            Ok(())
        }
        Err(e) => {
            if args.json {
                let error = serde_json::to_string(&JsonError {
                    error: format!("{:?}", e),
                })?;
                println!("{}", error);
                std::process::exit(1);
            }
            Err(e)
        }
    }
}
