use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{config::Config, gateways, output};

#[derive(Parser)]
#[command(name = "sheetmap", version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output format of the resolved places
    #[arg(long, value_enum, default_value_t = output::Format::Json)]
    format: output::Format,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve all addresses of a spreadsheet
    Resolve {
        /// Link to the spreadsheet
        reference: String,
    },
    /// Resolve the spreadsheet of the last successful run again (default)
    Replay,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    let pipeline = gateways::init_pipeline(cfg)?;
    let result = match args.command.unwrap_or(Command::Replay) {
        Command::Resolve { reference } => pipeline.submit(&reference),
        Command::Replay => match pipeline.start_up() {
            Some(result) => result,
            None => {
                log::info!("No saved reference to replay");
                return Ok(());
            }
        },
    };
    let places = result?;
    output::write_places(io::stdout().lock(), args.format, places)
}
