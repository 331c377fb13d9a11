use crate::errors::card::CardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid BIN: {0}")]
    InvalidBin(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Card error: {0}")]
    Card(#[from] CardError),
}

impl ServiceError {
    /// Text relayed to the user as-is.
    pub fn reply_text(&self) -> String {
        match self {
            ServiceError::InvalidBin(_) => {
                "Please provide a valid 6-digit BIN, e.g. `cardgen 411111`.".to_string()
            }
            ServiceError::InvalidFormat(input) => {
                format!("Invalid format: {input}. Expected number|MM|YYYY|CVC.")
            }
            ServiceError::Card(CardError::GenerationExhausted { .. }) => {
                "Could not generate a card number for this BIN, please try again.".to_string()
            }
            ServiceError::Card(other) => other.to_string(),
        }
    }
}
