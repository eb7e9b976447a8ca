mod commands;
mod data;
mod options;

use std::{error::Error, process};

use structopt::StructOpt;

use crate::options::{Options, Subcommand};

fn main() {
    env_logger::init();

    let options = Options::from_args();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    match options.command {
        Subcommand::Estimate(estimate_options) => {
            commands::estimate(estimate_options)?;
        }
        Subcommand::Place(place_options) => {
            commands::place(place_options)?;
        }
        Subcommand::Placements(placements_options) => {
            commands::placements(placements_options)?;
        }
    }

    Ok(())
}
