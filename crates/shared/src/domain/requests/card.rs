use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

static SIX_DIGIT_BIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("valid BIN regex"));

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateCardRequest {
    #[validate(regex(path = *SIX_DIGIT_BIN, message = "BIN must be exactly 6 digits"))]
    pub bin: String,
}

impl GenerateCardRequest {
    /// Takes the first argument after the command word, if any.
    pub fn from_command_args(args: &str) -> Self {
        Self {
            bin: args.split_whitespace().next().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ValidateCardRequest {
    #[validate(length(min = 1, message = "Card record is required"))]
    pub record: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_bin_passes() {
        assert!(GenerateCardRequest { bin: "411111".into() }.validate().is_ok());
    }

    #[test]
    fn other_bins_fail() {
        for bin in ["", "41111", "4111112", "41111a", " 411111"] {
            let req = GenerateCardRequest { bin: bin.into() };
            assert!(req.validate().is_err(), "{bin:?}");
        }
    }

    #[test]
    fn command_args_take_first_word() {
        assert_eq!(GenerateCardRequest::from_command_args("  520000 extra").bin, "520000");
        assert_eq!(GenerateCardRequest::from_command_args("   ").bin, "");
    }

    #[test]
    fn empty_record_fails() {
        assert!(ValidateCardRequest { record: String::new() }.validate().is_err());
    }
}
