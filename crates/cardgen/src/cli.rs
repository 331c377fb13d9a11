use crate::state::AppState;
use clap::Parser;
use shared::{
    domain::requests::{GenerateCardRequest, ValidateCardRequest},
    errors::ServiceError,
};
use std::path::PathBuf;
use tracing::info;

/// Generate Luhn-valid test card records from a BIN, or check the shape of one.
#[derive(Parser, Debug)]
#[command(name = "cardgen")]
#[command(version)]
pub struct Args {
    /// 6-digit BIN to generate a record for.
    #[arg(required_unless_present = "validate")]
    pub bin: Option<String>,

    /// Parse a `number|MM|YYYY|CVC` record instead of generating one.
    #[arg(long, value_name = "RECORD", conflicts_with = "bin")]
    pub validate: Option<String>,

    /// JSON file mapping BINs to issuer metadata.
    #[arg(long, value_name = "PATH")]
    pub bin_table: Option<PathBuf>,

    /// How many records to generate.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub count: u32,
}

/// Runs one invocation and returns the text to print.
pub async fn run(args: &Args, state: &AppState) -> Result<String, ServiceError> {
    if let Some(record) = &args.validate {
        let req = ValidateCardRequest {
            record: record.clone(),
        };
        let response = state.card_service.validate(&req)?;
        return Ok(response.data.reply_text());
    }

    let req = GenerateCardRequest::from_command_args(args.bin.as_deref().unwrap_or_default());
    let mut replies = Vec::with_capacity(args.count as usize);

    for _ in 0..args.count {
        let response = state.card_service.generate(&req).await?;
        replies.push(response.data.reply_text());
    }

    info!("Generated {} record(s) for bin={}", replies.len(), req.bin);

    Ok(replies.join("\n\n"))
}
