//! Name Validation
//!
//! Client-side rules applied before any request is sent.

use crate::error::ValidationError;

/// Maximum accepted name length in characters
pub const MAX_NAME_LEN: usize = 255;

/// Clamp typed input to the maximum length. Characters past the limit are
/// silently dropped.
pub fn clamp_name(value: &str) -> String {
    if value.chars().count() <= MAX_NAME_LEN {
        value.to_string()
    } else {
        value.chars().take(MAX_NAME_LEN).collect()
    }
}

/// Validate a trimmed, non-empty name against the disallowed-character rules
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.contains('<') || name.contains('>') {
        return Err(ValidationError::AngleBracket);
    }
    if name.contains('*') {
        return Err(ValidationError::Asterisk);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_short_input() {
        assert_eq!(clamp_name("Ana"), "Ana");
        assert_eq!(clamp_name(""), "");
    }

    #[test]
    fn clamp_drops_characters_past_limit() {
        let long: String = "a".repeat(300);
        let clamped = clamp_name(&long);
        assert_eq!(clamped.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn clamp_counts_characters_not_bytes() {
        // 300 two-byte characters must clamp to 255 characters, not 255 bytes
        let long: String = "ñ".repeat(300);
        let clamped = clamp_name(&long);
        assert_eq!(clamped.chars().count(), MAX_NAME_LEN);
        assert!(clamped.chars().all(|c| c == 'ñ'));
    }

    #[test]
    fn exactly_at_limit_is_kept() {
        let exact: String = "x".repeat(MAX_NAME_LEN);
        assert_eq!(clamp_name(&exact), exact);
    }

    #[test]
    fn plain_names_pass() {
        assert!(validate_name("Ana").is_ok());
        assert!(validate_name("Ana María").is_ok());
    }

    #[test]
    fn angle_brackets_rejected() {
        assert_eq!(validate_name("a<b"), Err(ValidationError::AngleBracket));
        assert_eq!(validate_name("a>b"), Err(ValidationError::AngleBracket));
        assert_eq!(validate_name("<script>"), Err(ValidationError::AngleBracket));
    }

    #[test]
    fn asterisk_rejected() {
        assert_eq!(validate_name("Ana*"), Err(ValidationError::Asterisk));
    }

    #[test]
    fn angle_bracket_reported_before_asterisk() {
        // Both present: the angle-bracket rule wins
        assert_eq!(validate_name("<*>"), Err(ValidationError::AngleBracket));
    }
}
