//! Identifier checks for callers that want them.
//!
//! The fragment builders trust their input: nothing validates the
//! identifiers or module paths handed to them, and a malformed name flows
//! through into the rendered text for the downstream compiler to reject.
//! Callers that want an up-front check can run these helpers before
//! building fragments.

use crate::error::EmitError;

/// Whether `name` is a plain TypeScript identifier
/// (`[A-Za-z_$][A-Za-z0-9_$]*`).
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Check `name`, returning it unchanged when valid.
pub fn validate_identifier(name: &str) -> Result<&str, EmitError> {
    if is_valid_identifier(name) {
        Ok(name)
    } else {
        Err(EmitError::InvalidIdentifier(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_identifiers() {
        for name in ["userName", "$row", "_tmp1", "A", "snake_case"] {
            assert!(is_valid_identifier(name), "rejected {name}");
        }
    }

    #[test]
    fn test_rejects_malformed_identifiers() {
        for name in ["", "2fast", "a-b", "with space", "Data.Type"] {
            assert!(!is_valid_identifier(name), "accepted {name}");
        }
    }

    #[test]
    fn test_validate_returns_descriptive_error() {
        assert_eq!(validate_identifier("ok"), Ok("ok"));
        let err = validate_identifier("a-b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "`a-b` is not a valid TypeScript identifier"
        );
    }
}
