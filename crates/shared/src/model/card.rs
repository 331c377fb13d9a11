use crate::errors::CardError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_BIN_LENGTH: usize = 6;
pub const MAX_BIN_LENGTH: usize = 8;

/// Leading 6 to 8 digits identifying the issuer range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bin(String);

impl Bin {
    pub fn parse(value: &str) -> Result<Self, CardError> {
        let value = value.trim();

        if !(MIN_BIN_LENGTH..=MAX_BIN_LENGTH).contains(&value.len())
            || !value.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CardError::InvalidBin(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Bin {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Bin::parse(&value)
    }
}

impl From<Bin> for String {
    fn from(bin: Bin) -> Self {
        bin.0
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A digit string that passes the Luhn check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardNumber(String);

impl CardNumber {
    pub(crate) fn new_unchecked(digits: String) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First six digits followed by a masked tail, safe for logs.
    pub fn masked(&self) -> String {
        let shown = self.0.len().min(MIN_BIN_LENGTH);
        let last4 = self.0.len().saturating_sub(4).max(shown);
        format!(
            "{}{}{}",
            &self.0[..shown],
            "*".repeat(last4 - shown),
            &self.0[last4..]
        )
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    pub month: u32,
    pub year: i32,
}

impl Expiry {
    pub fn month_str(&self) -> String {
        format!("{:02}", self.month)
    }

    pub fn year_str(&self) -> String {
        format!("{:04}", self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cvc(String);

impl Cvc {
    pub(crate) fn new_unchecked(digits: String) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cvc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `number|MM|YYYY|CVC`, components kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvc: String,
}

impl CardRecord {
    pub fn new(number: &CardNumber, expiry: Expiry, cvc: &Cvc) -> Self {
        Self {
            number: number.as_str().to_string(),
            exp_month: expiry.month_str(),
            exp_year: expiry.year_str(),
            cvc: cvc.as_str().to_string(),
        }
    }
}

impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.number, self.exp_month, self.exp_year, self.cvc
        )
    }
}
