//! Email and Brazilian phone number validation.
//!
//! These are plain pattern checks, not algorithmic validation: an email is
//! "plausible", a phone number matches one of the known Brazilian shapes.

use crate::error::ValidationError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Whether `email` looks like a deliverable address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
    });
    regex.is_match(email)
}

/// A validated Brazilian phone number.
///
/// With an area code (DDD): 11 digits for mobile, 10 for landline.
/// Without: 9 digits for mobile, 8 for landline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    digits: String,
    has_area_code: bool,
}

impl PhoneNumber {
    /// Validate `raw` as a phone number, stripping punctuation first.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidPhone`] when the digit count does
    /// not match any of the accepted shapes.
    pub fn parse(raw: &str, require_area_code: bool) -> Result<Self, ValidationError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        let ok = if require_area_code {
            digits.len() == 10 || digits.len() == 11
        } else {
            digits.len() == 8 || digits.len() == 9
        };
        if !ok {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self {
            digits,
            has_area_code: require_area_code,
        })
    }

    /// The bare digits.
    #[must_use]
    pub fn as_digits(&self) -> &str {
        &self.digits
    }

    /// Canonical display form, e.g. `(11) 98765-4321` or `3456-7890`.
    #[must_use]
    pub fn formatted(&self) -> String {
        if self.has_area_code {
            let (ddd, rest) = self.digits.split_at(2);
            let split = rest.len() - 4;
            format!("({}) {}-{}", ddd, &rest[..split], &rest[split..])
        } else {
            let split = self.digits.len() - 4;
            format!("{}-{}", &self.digits[..split], &self.digits[split..])
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "usuario@exemplo.com",
            "first.last+tag@sub.domain.org",
            "a_b%c@host.co",
        ] {
            assert!(is_valid_email(email), "should accept {email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "plainaddress", "@no-local.com", "user@host", "user @host.com"] {
            assert!(!is_valid_email(email), "should reject {email}");
        }
    }

    #[test]
    fn test_mobile_with_area_code() {
        let phone = PhoneNumber::parse("11987654321", true).expect("valid mobile");
        assert_eq!(phone.formatted(), "(11) 98765-4321");
    }

    #[test]
    fn test_landline_with_area_code() {
        let phone = PhoneNumber::parse("(62) 3456-7890", true).expect("valid landline");
        assert_eq!(phone.as_digits(), "6234567890");
        assert_eq!(phone.formatted(), "(62) 3456-7890");
    }

    #[test]
    fn test_without_area_code() {
        let mobile = PhoneNumber::parse("98765-4321", false).expect("valid mobile");
        assert_eq!(mobile.formatted(), "98765-4321");
        let landline = PhoneNumber::parse("34567890", false).expect("valid landline");
        assert_eq!(landline.formatted(), "3456-7890");
    }

    #[test]
    fn test_wrong_digit_counts() {
        assert!(PhoneNumber::parse("1234567", true).is_err());
        assert!(PhoneNumber::parse("123456789012", true).is_err());
        assert!(PhoneNumber::parse("11987654321", false).is_err());
    }
}
