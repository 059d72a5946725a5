// Allow dead code for features exported but not yet used by the CLI
#![allow(dead_code)]

use anyhow::Result;
use clap::Parser;

mod classify;
mod cli;
mod error;
mod parser;
mod pipeline;

use crate::cli::{Args, CliUtils};
use crate::parser::discovery::expand_inputs;
use crate::pipeline::SiftConfig;

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        eprintln!("Verbose mode enabled");
    }

    let config = match create_config(&args) {
        Ok(config) => config,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(2);
        }
    };

    if args.verbose {
        eprintln!(
            "Classifying {} documents into {}",
            config.documents.len(),
            config.output_root.display()
        );
    }

    match pipeline::run(&config) {
        Ok(report) => {
            CliUtils::show_success(&report.summary_line(), args.quiet);
            if args.stats {
                println!("{}", report.to_json()?);
            }
            Ok(())
        }
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(1);
        }
    }
}

fn create_config(args: &Args) -> Result<SiftConfig, error::SiftError> {
    let documents = expand_inputs(&args.inputs, args.recursive)?;

    let config = SiftConfig::new(args.output.clone())
        .with_documents(documents)
        .with_quiet(args.quiet);

    config
        .validate()
        .map_err(error::SiftError::configuration)?;

    Ok(config)
}
