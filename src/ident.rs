use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap());

/// DOT identifiers can't contain `-`; everything else passes through.
pub fn sanitize_identifier(raw: &str) -> String {
    raw.replace('-', "_")
}

/// An ASCII letter followed by letters, digits, `_` or `-`. Anything that
/// passes is a legal DOT identifier once sanitized.
pub fn is_valid_identifier(raw: &str) -> bool {
    IDENTIFIER_RE.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn replaces_every_hyphen() {
        assert_eq!(sanitize_identifier("api-gateway-v2"), "api_gateway_v2");
        assert_eq!(sanitize_identifier("plain_id"), "plain_id");
        assert_eq!(sanitize_identifier(""), "");
    }

    #[test]
    fn accepts_legal_identifiers() {
        for id in ["A", "web", "api-gateway", "Service_2", "x-1_y"] {
            assert!(is_valid_identifier(id), "{id} should be valid");
        }
    }

    #[test]
    fn rejects_illegal_identifiers() {
        for id in ["", "1web", "_web", "-web", "my service", "quo\"te", "semi;colon", "tab\t", "é"] {
            assert!(!is_valid_identifier(id), "{id:?} should be invalid");
        }
    }

    #[test]
    fn rejects_trailing_newline() {
        assert!(!is_valid_identifier("web\n"));
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(raw in ".*") {
            let once = sanitize_identifier(&raw);
            prop_assert_eq!(sanitize_identifier(&once), once.clone());
            prop_assert!(!once.contains('-'));
        }

        #[test]
        fn valid_identifiers_sanitize_to_dot_ids(raw in "[A-Za-z][A-Za-z0-9_-]{0,16}") {
            prop_assert!(is_valid_identifier(&raw));
            let sanitized = sanitize_identifier(&raw);
            prop_assert!(sanitized.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
    }
}
