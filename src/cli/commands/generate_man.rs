//! Generate man page command

use crate::cli::Cli;
use crate::error::{OutputError, RuleDeckError};
use crate::exit_codes;
use clap::CommandFactory;
use std::fs;

use super::GenerateManArgs;

/// Execute the generate-man command
pub async fn execute(args: GenerateManArgs) -> Result<i32, RuleDeckError> {
    let man = clap_mangen::Man::new(Cli::command());
    let output_path = args.output.join("ruledeck.1");
    let write_error = |e: std::io::Error| OutputError::FileWrite {
        path: output_path.display().to_string(),
        source: e,
    };

    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer).map_err(write_error)?;
    fs::write(&output_path, buffer).map_err(write_error)?;

    println!("Man page generated: {}", output_path.display());

    Ok(exit_codes::SUCCESS)
}
