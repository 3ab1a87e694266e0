use thiserror::Error;

/// Validation errors for draft fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be blank")]
    BlankName,
}

/// Validates a student name: must contain at least one non-whitespace character.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::BlankName)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn simple_name_is_valid() {
        assert_eq!(validate_name("Tanu"), Ok(()));
    }

    #[test]
    fn name_with_surrounding_spaces_is_valid() {
        assert_eq!(validate_name("  Budi  "), Ok(()));
    }

    #[test]
    fn empty_is_blank() {
        assert_eq!(validate_name(""), Err(ValidationError::BlankName));
    }

    #[test]
    fn spaces_only_is_blank() {
        assert_eq!(validate_name("   "), Err(ValidationError::BlankName));
    }

    #[test]
    fn mixed_whitespace_is_blank() {
        assert_eq!(validate_name(" \t\n\r "), Err(ValidationError::BlankName));
    }

    #[test]
    fn unicode_whitespace_is_blank() {
        // U+2003 EM SPACE, U+3000 IDEOGRAPHIC SPACE
        assert_eq!(
            validate_name("\u{2003}\u{3000}"),
            Err(ValidationError::BlankName)
        );
    }

    #[test]
    fn error_message() {
        assert_eq!(
            ValidationError::BlankName.to_string(),
            "name cannot be blank"
        );
    }

    #[quickcheck]
    fn whitespace_only_is_never_valid(counts: Vec<u8>) -> bool {
        let ws = [' ', '\t', '\n', '\r', '\u{00A0}', '\u{2003}'];
        let name: String = counts.iter().map(|c| ws[*c as usize % ws.len()]).collect();
        validate_name(&name).is_err()
    }

    #[quickcheck]
    fn any_visible_char_makes_valid(prefix: u8, suffix: u8) -> bool {
        let pad = |n: u8| " ".repeat(n as usize % 8);
        let name = format!("{}x{}", pad(prefix), pad(suffix));
        validate_name(&name).is_ok()
    }
}
