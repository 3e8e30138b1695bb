//! Email address helpers

/// Trim and lower-case an email address for lookups and passcode keys
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Mask the local part of an email for logging (`jo***@example.com`)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jo@Example.COM "), "jo@example.com");
        assert_eq!(normalize_email("   "), "");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("joanna@example.com"), "jo***@example.com");
        assert_eq!(mask_email("j@example.com"), "j***@example.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
