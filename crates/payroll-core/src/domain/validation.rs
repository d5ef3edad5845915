//! Field rules shared by construction, setters, and re-validation.
//!
//! Each rule is one named function. Entities never inline a check; they call
//! the rule for the field so the predicate and its message cannot drift
//! between the constructor and the setters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{error::DomainError, value_objects::EmployeeField};

/// `local-part @ domain-labels . tld`, with a 2 to 6 letter top-level segment.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$")
        .expect("email pattern is a valid regex")
});

/// `true` if the string is empty or whitespace only.
///
/// Non-breaking spaces (U+00A0, U+2007, U+202F) and NEL (U+0085) are text,
/// not whitespace; the ASCII separators FS to US (U+001C..U+001F) are
/// whitespace.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_blank_char)
}

fn is_blank_char(c: char) -> bool {
    match c {
        '\t'..='\r' | '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}

/// `true` if the string is a non-blank, well-formed e-mail address.
pub fn is_valid_email(value: &str) -> bool {
    !is_blank(value) && EMAIL_PATTERN.is_match(value)
}

/// Require a present, non-blank text value for `field`.
pub fn require_text(field: EmployeeField, value: Option<&str>) -> Result<&str, DomainError> {
    match value {
        Some(v) if !is_blank(v) => Ok(v),
        _ => Err(DomainError::invalid(field)),
    }
}

/// Require a count that is zero or positive.
pub fn require_non_negative(field: EmployeeField, value: i32) -> Result<i32, DomainError> {
    if value < 0 {
        Err(DomainError::invalid(field))
    } else {
        Ok(value)
    }
}

/// Require a present, well-formed e-mail address.
pub fn require_email(value: Option<&str>) -> Result<&str, DomainError> {
    match value {
        Some(v) if is_valid_email(v) => Ok(v),
        _ => Err(DomainError::invalid(EmployeeField::Email)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn non_breaking_spaces_are_not_blank() {
        for value in ["\u{A0}", "\u{2007}", "\u{202F}", " \u{A0} ", "\u{85}"] {
            assert!(!is_blank(value), "{value:?}");
        }
        assert_eq!(
            require_text(EmployeeField::FirstName, Some("\u{A0}")).unwrap(),
            "\u{A0}"
        );
    }

    #[test]
    fn unicode_and_control_separators_are_blank() {
        for value in ["\u{1C}\u{1F}", "\u{2003}", "\u{3000}", "\u{2028}\u{2029}", "\u{0B}\u{0C}"] {
            assert!(is_blank(value), "{value:?}");
        }
    }

    #[test]
    fn require_text_rejects_absent_empty_and_whitespace() {
        for value in [None, Some(""), Some("   "), Some("\t")] {
            let err = require_text(EmployeeField::Description, value).unwrap_err();
            assert_eq!(err.to_string(), "Description cannot be empty.");
        }
    }

    #[test]
    fn require_text_returns_value_untrimmed() {
        assert_eq!(
            require_text(EmployeeField::FirstName, Some(" Frodo ")).unwrap(),
            " Frodo "
        );
    }

    #[test]
    fn require_non_negative_boundaries() {
        assert_eq!(require_non_negative(EmployeeField::JobYears, 0).unwrap(), 0);
        assert_eq!(
            require_non_negative(EmployeeField::JobYears, i32::MAX).unwrap(),
            i32::MAX
        );
        let err = require_non_negative(EmployeeField::JobYears, -1).unwrap_err();
        assert_eq!(err.to_string(), "Job Years cannot be negative.");
        assert!(require_non_negative(EmployeeField::JobYears, i32::MIN).is_err());
    }

    #[test]
    fn well_formed_addresses_pass() {
        for email in [
            "frodo.baggins@lordoftherings.com",
            "sam+garden@shire.co.uk",
            "a_b-c@x.museum",
            "x@y.io",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
            assert_eq!(require_email(Some(email)).unwrap(), email);
        }
    }

    #[test]
    fn malformed_addresses_fail() {
        for email in [
            "",
            "   ",
            "frodo",
            "frodo@",
            "@shire.me",
            "frodo@shire",
            "frodo@shire.c",
            "frodo@shire.company",
            "frodo baggins@shire.me",
            "frodo@shire.me ",
            "frodo@shire.c0m",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be invalid");
        }
        let err = require_email(None).unwrap_err();
        assert_eq!(err.to_string(), "E-mail must be valid.");
    }
}
