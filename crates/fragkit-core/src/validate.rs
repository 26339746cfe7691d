//! Newsletter form input validation.

/// Shape check for an email address. Not RFC 5322; the form only needs to
/// catch obvious typos before showing a confirmation.
pub fn is_valid_email(input: &str) -> bool {
    let input = input.trim();
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }
    if input.matches('@').count() != 1 {
        return false;
    }

    let (local, domain) = match input.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain.contains('.')
        && !domain.starts_with(['.', '-'])
        && !domain.ends_with(['.', '-'])
        && !domain.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Email Validation Tests ===

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co.uk"));
        assert!(is_valid_email("  user@example.com  "));
    }

    #[test]
    fn test_rejects_missing_domain() {
        assert!(!is_valid_email("user@"));
    }

    #[test]
    fn test_rejects_missing_local_part() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_rejects_whitespace_and_missing_at() {
        assert!(!is_valid_email("user example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_rejects_malformed_domains() {
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.example.com"));
        assert!(!is_valid_email("user@example.com."));
        assert!(!is_valid_email("user@exa..mple.com"));
        assert!(!is_valid_email("user@@example.com"));
    }
}
