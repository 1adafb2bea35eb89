//! Validated fixed-length phone number value object.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in every phone number.
pub const PHONE_NUMBER_LENGTH: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    #[error("Invalid phone number value: {value}")]
    InvalidFormat { value: String },
}

pub type PhoneNumberResult<T> = Result<T, PhoneNumberError>;

/// A phone number made of exactly [`PHONE_NUMBER_LENGTH`] decimal digits.
///
/// The value can only be obtained through validation, so every `PhoneNumber`
/// in the program is well formed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    digits: [u8; PHONE_NUMBER_LENGTH],
}

impl PhoneNumber {
    pub const LENGTH: usize = PHONE_NUMBER_LENGTH;

    pub fn new(raw: &str) -> PhoneNumberResult<Self> {
        let bytes = raw.as_bytes();
        if bytes.len() != Self::LENGTH {
            return Err(invalid(raw));
        }

        let mut digits = [0u8; PHONE_NUMBER_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(bytes) {
            if !byte.is_ascii_digit() {
                return Err(invalid(raw));
            }
            *slot = byte - b'0';
        }

        Ok(Self { digits })
    }

    /// Validate input that may be missing altogether.
    pub fn parse_optional(raw: Option<&str>) -> PhoneNumberResult<Self> {
        match raw {
            Some(raw) => Self::new(raw),
            None => Err(PhoneNumberError::InvalidFormat {
                value: "<none>".to_string(),
            }),
        }
    }

    /// Digits as integers 0..=9 in their original order.
    #[inline]
    pub fn digits(&self) -> &[u8; PHONE_NUMBER_LENGTH] {
        &self.digits
    }
}

fn invalid(raw: &str) -> PhoneNumberError {
    PhoneNumberError::InvalidFormat {
        value: raw.to_string(),
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_number_exposes_digits_in_order() {
        let number = PhoneNumber::new("123456789").unwrap();
        assert_eq!(number.digits(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(number.to_string(), "123456789");
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        let number: PhoneNumber = "000000042".parse().unwrap();
        assert_eq!(number.digits(), &[0, 0, 0, 0, 0, 0, 0, 4, 2]);
        assert_eq!(number.to_string(), "000000042");
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        for raw in ["", "12345678", "1234567890", "1"] {
            assert_eq!(
                PhoneNumber::new(raw),
                Err(PhoneNumberError::InvalidFormat {
                    value: raw.to_string()
                }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_digit_content_is_rejected() {
        for raw in ["12345678a", "-12345678", "1234 5678", " 12345678", "１２３４５６７８９"] {
            assert!(PhoneNumber::new(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let err = PhoneNumber::parse_optional(None).unwrap_err();
        assert!(matches!(err, PhoneNumberError::InvalidFormat { .. }));
        assert!(PhoneNumber::parse_optional(Some("987654321")).is_ok());
    }

    #[test]
    fn test_error_message_includes_raw_input() {
        let err = PhoneNumber::new("12345678a").unwrap_err();
        assert_eq!(err.to_string(), "Invalid phone number value: 12345678a");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let number = PhoneNumber::new("555000111").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"555000111\"");

        let back: PhoneNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, number);

        assert!(serde_json::from_str::<PhoneNumber>("\"55500011\"").is_err());
    }
}
