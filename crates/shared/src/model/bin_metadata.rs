use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";

/// Issuer details for a BIN. Any field may be missing from the lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinMetadata {
    pub bank: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub brand: Option<String>,
    pub prepaid: Option<bool>,
}

impl BinMetadata {
    pub fn bank_or_unknown(&self) -> &str {
        self.bank.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn country_or_unknown(&self) -> &str {
        self.country.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn card_type_or_unknown(&self) -> &str {
        self.card_type.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn brand_or_unknown(&self) -> &str {
        self.brand.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn prepaid_or_unknown(&self) -> &str {
        match self.prepaid {
            Some(true) => "Yes",
            Some(false) => "No",
            None => UNKNOWN,
        }
    }
}
