use crate::{
    model::{BinMetadata, CardRecord},
    utils::{luhn_valid, matches_visa_pattern},
};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct BinMetadataResponse {
    pub bank: String,
    pub country: String,
    pub card_type: String,
    pub brand: String,
    pub prepaid: String,
}

impl From<&BinMetadata> for BinMetadataResponse {
    fn from(value: &BinMetadata) -> Self {
        Self {
            bank: value.bank_or_unknown().to_string(),
            country: value.country_or_unknown().to_string(),
            card_type: value.card_type_or_unknown().to_string(),
            brand: value.brand_or_unknown().to_string(),
            prepaid: value.prepaid_or_unknown().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCardResponse {
    pub bin: String,
    pub card: String,
    pub metadata: BinMetadataResponse,
}

impl GeneratedCardResponse {
    pub fn new(bin: &str, record: &CardRecord, metadata: &BinMetadata) -> Self {
        Self {
            bin: bin.to_string(),
            card: record.to_string(),
            metadata: BinMetadataResponse::from(metadata),
        }
    }

    pub fn reply_text(&self) -> String {
        let mut reply = String::new();
        let _ = writeln!(reply, "BIN: {}", self.bin);
        let _ = writeln!(reply, "Card: {}", self.card);
        let _ = writeln!(reply, "Bank: {}", self.metadata.bank);
        let _ = writeln!(reply, "Country: {}", self.metadata.country);
        let _ = writeln!(reply, "Type: {}", self.metadata.card_type);
        let _ = writeln!(reply, "Brand: {}", self.metadata.brand);
        let _ = write!(reply, "Prepaid: {}", self.metadata.prepaid);
        reply
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardRecordResponse {
    pub number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvc: String,
    pub luhn_valid: bool,
    pub visa_shaped: bool,
}

impl From<CardRecord> for CardRecordResponse {
    fn from(value: CardRecord) -> Self {
        Self {
            luhn_valid: luhn_valid(&value.number),
            visa_shaped: matches_visa_pattern(&value.number),
            number: value.number,
            exp_month: value.exp_month,
            exp_year: value.exp_year,
            cvc: value.cvc,
        }
    }
}

impl CardRecordResponse {
    pub fn reply_text(&self) -> String {
        let yes_no = |flag: bool| if flag { "yes" } else { "no" };
        format!(
            "Number: {}\nExpiry: {}/{}\nCVC: {}\nLuhn valid: {}\nVisa format: {}",
            self.number,
            self.exp_month,
            self.exp_year,
            self.cvc,
            yes_no(self.luhn_valid),
            yes_no(self.visa_shaped),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CardRecord {
        CardRecord {
            number: "4111111111111111".into(),
            exp_month: "07".into(),
            exp_year: "2028".into(),
            cvc: "321".into(),
        }
    }

    #[test]
    fn reply_with_unknown_metadata() {
        let response = GeneratedCardResponse::new("411111", &record(), &BinMetadata::default());

        assert_eq!(
            response.reply_text(),
            "BIN: 411111\n\
             Card: 4111111111111111|07|2028|321\n\
             Bank: Unknown\n\
             Country: Unknown\n\
             Type: Unknown\n\
             Brand: Unknown\n\
             Prepaid: Unknown"
        );
    }

    #[test]
    fn reply_with_partial_metadata() {
        let metadata = BinMetadata {
            bank: Some("Test Bank".into()),
            brand: Some("VISA".into()),
            prepaid: Some(true),
            ..Default::default()
        };

        let reply = GeneratedCardResponse::new("411111", &record(), &metadata).reply_text();

        assert!(reply.contains("Bank: Test Bank"));
        assert!(reply.contains("Brand: VISA"));
        assert!(reply.contains("Prepaid: Yes"));
        assert!(reply.contains("Country: Unknown"));
    }

    #[test]
    fn record_response_reports_checks() {
        let response = CardRecordResponse::from(record());

        assert!(response.luhn_valid);
        assert!(response.visa_shaped);
        assert!(response.reply_text().contains("Expiry: 07/2028"));
    }
}
