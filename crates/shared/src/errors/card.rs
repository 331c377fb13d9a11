use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("Invalid BIN: {0}")]
    InvalidBin(String),

    #[error("Invalid card format: {0}")]
    InvalidFormat(String),

    #[error("No Luhn-valid number found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}
