//! Schema command - Display the JSON Schema for the release notification

use super::{write_output, SchemaArgs};
use crate::error::RuleDeckError;
use crate::exit_codes;
use crate::release::RELEASE_NOTIFICATION_SCHEMA;

pub async fn execute(args: SchemaArgs) -> Result<i32, RuleDeckError> {
    tracing::info!("Writing release notification schema");
    write_output(args.output.as_deref(), RELEASE_NOTIFICATION_SCHEMA)?;
    Ok(exit_codes::SUCCESS)
}
