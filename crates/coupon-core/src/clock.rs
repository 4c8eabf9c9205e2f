//! Calendar helpers.

use chrono::{NaiveDate, Utc};

/// Returns the current calendar date in UTC.
///
/// Expiration dates are compared against this value when a coupon is created.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_matches_utc_now() {
        let before = Utc::now().date_naive();
        let value = today();
        let after = Utc::now().date_naive();
        assert!(value >= before && value <= after);
    }
}
