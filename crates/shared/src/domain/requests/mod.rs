mod card;

pub use self::card::{GenerateCardRequest, ValidateCardRequest};
