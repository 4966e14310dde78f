//! Recipient placeholder expansion.
//!
//! Bodies may contain `{{name}}`, `{{company}}`, and `{{email}}` markers
//! that are replaced per recipient before link wrapping. This is plain
//! substitution, not a template language: unknown markers pass through
//! untouched and missing values expand to empty strings.

pub const NAME_PLACEHOLDER: &str = "{{name}}";
pub const COMPANY_PLACEHOLDER: &str = "{{company}}";
pub const EMAIL_PLACEHOLDER: &str = "{{email}}";

/// Replaces every placeholder occurrence with the recipient's values.
pub fn apply_placeholders(
    text: &str,
    recipient_email: &str,
    recipient_name: Option<&str>,
    recipient_company: Option<&str>,
) -> String {
    text.replace(NAME_PLACEHOLDER, recipient_name.unwrap_or(""))
        .replace(COMPANY_PLACEHOLDER, recipient_company.unwrap_or(""))
        .replace(EMAIL_PLACEHOLDER, recipient_email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_all_occurrences() {
        let out = apply_placeholders(
            "Hi {{name}}, {{name}} from {{company}}",
            "a@b.com",
            Some("Ada"),
            Some("Acme"),
        );

        assert_eq!(out, "Hi Ada, Ada from Acme");
    }

    #[test]
    fn test_missing_values_expand_to_empty() {
        let out = apply_placeholders("Hi {{name}} ({{company}})", "a@b.com", None, None);
        assert_eq!(out, "Hi  ()");
    }

    #[test]
    fn test_email_placeholder() {
        let out = apply_placeholders("Sent to {{email}}", "user@example.com", None, None);
        assert_eq!(out, "Sent to user@example.com");
    }

    #[test]
    fn test_unknown_markers_pass_through() {
        let out = apply_placeholders("{{unknown}} stays", "a@b.com", Some("Ada"), None);
        assert_eq!(out, "{{unknown}} stays");
    }

    #[test]
    fn test_no_placeholders_is_identity() {
        let text = "plain body with http://a.com";
        assert_eq!(apply_placeholders(text, "a@b.com", None, None), text);
    }
}
