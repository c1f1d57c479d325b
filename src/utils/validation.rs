//! Field format checks shared by every handler that accepts contact details.

/// Basic email validation: an `@` must be present and the part after the
/// last `@` must contain a dot. No domain or TLD structure checking.
pub fn validate_email(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}

/// Basic phone validation: after removing the separators `-`, space, `(`
/// and `)`, the remainder must be all decimal digits and at least 10 long.
pub fn validate_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, '-' | ' ' | '(' | ')'))
        .collect();

    !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit()) && cleaned.len() >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("a@b.com"));
    }

    #[test]
    fn rejects_email_without_at() {
        assert!(!validate_email("abc"));
    }

    #[test]
    fn rejects_email_without_dot_after_at() {
        assert!(!validate_email("a@b"));
    }

    #[test]
    fn dot_before_at_does_not_count() {
        assert!(!validate_email("a.b@c"));
    }

    #[test]
    fn checks_domain_of_last_at() {
        assert!(validate_email("a@b@c.com"));
        assert!(!validate_email("a@b.c@d"));
    }

    #[test]
    fn rejects_empty_inputs() {
        assert!(!validate_email(""));
        assert!(!validate_phone(""));
    }

    #[test]
    fn accepts_separated_phone() {
        assert!(validate_phone("0412-345-678"));
        assert!(validate_phone("(02) 9876 1234"));
    }

    #[test]
    fn rejects_short_phone() {
        assert!(!validate_phone("12345"));
    }

    #[test]
    fn rejects_non_digit_phone() {
        assert!(!validate_phone("04-12-AB-CD"));
    }

    #[test]
    fn separators_alone_are_not_a_number() {
        assert!(!validate_phone("---   ()"));
    }
}
