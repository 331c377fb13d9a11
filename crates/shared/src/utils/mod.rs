mod card_pattern;
mod expiry;
mod logs;
mod luhn;
mod random_card_number;

pub use self::card_pattern::{matches_visa_pattern, parse_card_record};
pub use self::expiry::{EXPIRY_YEAR_SPAN, current_year, random_cvc, random_expiry};
pub use self::logs::Logger;
pub use self::luhn::{luhn_check_digit, luhn_valid};
pub use self::random_card_number::{
    DEFAULT_CARD_LENGTH, DEFAULT_MAX_ATTEMPTS, generate_card_number, random_card_number,
};
