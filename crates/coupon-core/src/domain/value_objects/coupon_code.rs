//! Coupon code value object.

use crate::{CouponError, CouponResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coupon code made of exactly [`CouponCode::LENGTH`] ASCII alphanumeric characters.
///
/// Raw codes may contain separators or punctuation (`"SAV#E10"`); those are
/// stripped before the length rule is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CouponCode(String);

impl CouponCode {
    /// Required number of characters after sanitization.
    pub const LENGTH: usize = 6;

    /// Removes every character outside `[A-Za-z0-9]`.
    ///
    /// The result keeps the relative order of the surviving characters and
    /// may be empty.
    #[must_use]
    pub fn sanitize(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_alphanumeric).collect()
    }

    /// Checks that an already sanitized code has the required length.
    pub fn validate(sanitized: &str) -> CouponResult<()> {
        let length = sanitized.chars().count();
        if length != Self::LENGTH {
            return Err(CouponError::business_rule(format!(
                "The 'code' field must contain exactly {} alphanumeric characters after removing special characters. Sanitized code: '{}' ({} chars).",
                Self::LENGTH,
                sanitized,
                length
            )));
        }
        Ok(())
    }

    /// Sanitizes and validates a raw code.
    pub fn parse(raw: &str) -> CouponResult<Self> {
        let sanitized = Self::sanitize(raw);
        Self::validate(&sanitized)?;
        Ok(Self(sanitized))
    }

    /// Wraps a code without validation.
    ///
    /// Only for values read back from storage, where the code was validated
    /// before it was written.
    #[must_use]
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CouponCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CouponCode {
    type Error = CouponError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CouponCode> for String {
    fn from(code: CouponCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CouponCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let mut rest = haystack.chars();
        needle.chars().all(|c| rest.any(|h| h == c))
    }

    #[test]
    fn test_sanitize_strips_special_characters() {
        assert_eq!(CouponCode::sanitize("SAV#E10"), "SAVE10");
        assert_eq!(CouponCode::sanitize("a-b_c d.e!f"), "abcdef");
        assert_eq!(CouponCode::sanitize("ABC123"), "ABC123");
    }

    #[test]
    fn test_sanitize_may_return_empty() {
        assert_eq!(CouponCode::sanitize(""), "");
        assert_eq!(CouponCode::sanitize("#$%^&*"), "");
    }

    #[test]
    fn test_sanitize_drops_non_ascii_letters() {
        assert_eq!(CouponCode::sanitize("PROMOÇÃO1"), "PROMOO1");
        assert_eq!(CouponCode::sanitize("１２３ABC"), "ABC");
    }

    #[test]
    fn test_sanitize_output_is_ordered_subsequence() {
        let inputs = [
            "SAV#E10",
            "  x-y-z 1 2 3  ",
            "ÀBÇ-12/34",
            "!!!",
            "already6",
            "mixed_CASE-99",
        ];

        for raw in inputs {
            let sanitized = CouponCode::sanitize(raw);
            assert!(sanitized.chars().all(|c| c.is_ascii_alphanumeric()), "{raw}");
            assert!(is_subsequence(&sanitized, raw), "{raw}");
        }
    }

    #[test]
    fn test_validate_length_boundaries() {
        assert!(CouponCode::validate("ABCDE").is_err());
        assert!(CouponCode::validate("ABCDEF").is_ok());
        assert!(CouponCode::validate("ABCDEFG").is_err());
        assert!(CouponCode::validate("").is_err());
    }

    #[test]
    fn test_validate_message_names_sanitized_code() {
        let err = CouponCode::validate("AB1").unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(err.to_string().contains("'AB1' (3 chars)"));
    }

    #[test]
    fn test_parse_checks_length_after_sanitizing() {
        let code = CouponCode::parse("SAV#E10").unwrap();
        assert_eq!(code.as_str(), "SAVE10");

        // seven raw characters, five after sanitizing
        assert!(CouponCode::parse("AB-CD-E").is_err());
    }

    #[test]
    fn test_serde_round_trip_rejects_invalid() {
        let code: CouponCode = serde_json::from_str("\"SAVE10\"").unwrap();
        assert_eq!(code.to_string(), "SAVE10");
        assert!(serde_json::from_str::<CouponCode>("\"SHORT\"").is_err());
    }
}
