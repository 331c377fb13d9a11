use crate::{errors::CardError, model::CardRecord};
use regex::Regex;
use std::sync::LazyLock;

static VISA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^4[0-9]{12}([0-9]{3})?$").expect("valid visa regex"));

static RECORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{16})\|([0-9]{2})\|([0-9]{4})\|([0-9]{3,4})$")
        .expect("valid card record regex")
});

/// Visa-shaped: 13 or 16 digits starting with 4. No checksum involved.
pub fn matches_visa_pattern(input: &str) -> bool {
    VISA_PATTERN.is_match(input)
}

/// Parses `number|MM|YYYY|CVC`. Purely structural: the month is not
/// range-checked, so `13` is accepted.
pub fn parse_card_record(input: &str) -> Result<CardRecord, CardError> {
    let trimmed = input.trim();

    if !RECORD_PATTERN.is_match(trimmed) {
        return Err(CardError::InvalidFormat(trimmed.to_string()));
    }

    let mut parts = trimmed.split('|').map(str::to_string);

    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(number), Some(exp_month), Some(exp_year), Some(cvc)) => Ok(CardRecord {
            number,
            exp_month,
            exp_year,
            cvc,
        }),
        _ => Err(CardError::InvalidFormat(trimmed.to_string())),
    }
}
