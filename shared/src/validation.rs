//! Validation utilities for KhetSetGo
//!
//! Includes India-specific phone checks used when logging and normalising
//! SMS recipients.

use validator::ValidationError;

// ============================================================================
// General Validations
// ============================================================================

/// Reject empty or whitespace-only strings
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

// ============================================================================
// Phone Numbers
// ============================================================================

/// Strip every whitespace character from a phone number
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether a number looks like an Indian mobile number
/// Accepts: 9876543210, 09876543210, +91 98765 43210, 919876543210
pub fn is_indian_mobile(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let local = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('0') => &digits[1..],
        12 if digits.starts_with("91") => &digits[2..],
        _ => return false,
    };

    matches!(local.chars().next(), Some('6'..='9'))
}

/// Mask all but the last four digits, for logs
pub fn mask_phone(phone: &str) -> String {
    let normalized = normalize_phone(phone);
    let visible = normalized.chars().count().saturating_sub(4);
    normalized
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible && c.is_ascii_digit() { '*' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("hello").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t\n").is_err());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+91 8669490817"), "+918669490817");
        assert_eq!(normalize_phone("+91  86694\t90817 "), "+918669490817");
        assert_eq!(normalize_phone("+911234567890"), "+911234567890");
    }

    #[test]
    fn test_indian_mobile_valid() {
        assert!(is_indian_mobile("9876543210"));
        assert!(is_indian_mobile("09876543210"));
        assert!(is_indian_mobile("+91 98765 43210"));
        assert!(is_indian_mobile("919876543210"));
    }

    #[test]
    fn test_indian_mobile_invalid() {
        assert!(!is_indian_mobile("12345"));
        assert!(!is_indian_mobile("+911234567890")); // Landline-style prefix
        assert!(!is_indian_mobile("abcdefghij"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+91 8669490817"), "+********0817");
        assert_eq!(mask_phone("123"), "123");
    }

    proptest! {
        #[test]
        fn prop_normalized_phone_has_no_whitespace(phone in "[0-9+ \t]{0,20}") {
            let normalized = normalize_phone(&phone);
            prop_assert!(!normalized.chars().any(char::is_whitespace));
            prop_assert_eq!(normalize_phone(&normalized), normalized.clone());
        }
    }
}
