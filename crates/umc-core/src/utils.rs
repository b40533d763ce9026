//! Utility helpers — data path resolution and vendor error-body sanitizing.

use std::path::PathBuf;

/// Placeholder substituted for the credential in any vendor-supplied text.
pub const REDACTED: &str = "[REDACTED]";

/// Maximum length kept from a vendor error body.
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Get the data directory (e.g. `~/.umc/`).
pub fn get_data_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".umc")
}

/// Truncate a string to `max_len` characters, adding "..." if truncated.
/// Unicode-safe.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Prepare a vendor error body for inclusion in an error message.
///
/// Vendors sometimes echo (part of) the key they rejected, so every
/// occurrence of `secret` is replaced before the body is trimmed and
/// truncated.
pub fn sanitize_body(body: &str, secret: &str) -> String {
    let scrubbed = if secret.is_empty() {
        body.to_string()
    } else {
        body.replace(secret, REDACTED)
    };
    truncate_string(scrubbed.trim(), MAX_ERROR_BODY_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        let result = truncate_string("hello world, this is a long string", 15);
        assert_eq!(result, "hello world,...");
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate_string("こんにちは世界です", 5), "こん...");
    }

    #[test]
    fn test_sanitize_redacts_secret() {
        let body = r#"{"error":{"message":"Incorrect API key provided: sk-test-123"}}"#;
        let clean = sanitize_body(body, "sk-test-123");
        assert!(!clean.contains("sk-test-123"));
        assert!(clean.contains(REDACTED));
    }

    #[test]
    fn test_sanitize_empty_secret_keeps_body() {
        assert_eq!(sanitize_body("  not found \n", ""), "not found");
    }

    #[test]
    fn test_sanitize_truncates() {
        let body = "x".repeat(2000);
        let clean = sanitize_body(&body, "key");
        assert_eq!(clean.chars().count(), MAX_ERROR_BODY_CHARS);
        assert!(clean.ends_with("..."));
    }

    #[test]
    fn test_data_path_ends_with_umc() {
        assert!(get_data_path().ends_with(".umc"));
    }

    #[test]
    fn test_data_path_is_under_platform_home() {
        if let Some(home) = dirs_next::home_dir() {
            assert_eq!(get_data_path(), home.join(".umc"));
        }
    }
}
