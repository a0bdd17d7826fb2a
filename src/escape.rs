const RESERVED: [char; 6] = ['"', '{', '}', '<', '>', '|'];

/// Escapes text placed inside a double-quoted DOT attribute. A backslash that
/// already escapes a reserved character or `n` is kept as-is; any other
/// backslash is doubled.
pub fn escape_for_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.peek() {
                Some(&next) if next == 'n' || RESERVED.contains(&next) => {
                    out.push('\\');
                    out.push(next);
                    chars.next();
                }
                _ => out.push_str("\\\\"),
            },
            '\n' => out.push_str("\\n"),
            _ if RESERVED.contains(&ch) => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Entity escaping for text inside an HTML-like `<TABLE>` label.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn escapes_each_reserved_character() {
        assert_eq!(escape_for_markup("a\"b"), "a\\\"b");
        assert_eq!(escape_for_markup("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_for_markup("{x}"), "\\{x\\}");
        assert_eq!(escape_for_markup("<a|b>"), "\\<a\\|b\\>");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_for_markup("Web: serves pages"), "Web: serves pages");
        assert_eq!(escape_for_markup(""), "");
    }

    #[test]
    fn escaped_sequences_are_kept() {
        assert_eq!(escape_for_markup("a\\\"b"), "a\\\"b");
        assert_eq!(escape_for_markup("one\\ntwo"), "one\\ntwo");
        assert_eq!(escape_for_markup("\\{x\\}"), "\\{x\\}");
    }

    #[test]
    fn stray_backslashes_are_doubled() {
        assert_eq!(escape_for_markup("C:\\tmp"), "C:\\\\tmp");
        assert_eq!(escape_for_markup("C:\\"), "C:\\\\");
        assert_eq!(escape_for_markup("a\\\\\"b"), "a\\\\\\\"b");
    }

    #[test]
    fn html_escaping_covers_markup_characters() {
        assert_eq!(escape_html("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
        assert_eq!(escape_html("it's"), "it&apos;s");
    }

    proptest! {
        #[test]
        fn no_reserved_character_survives_unescaped(
            text in prop_oneof!["(?s).{0,64}", "[a\\\\\"n{}<>|\n]{0,32}"]
        ) {
            let escaped = escape_for_markup(&text);
            prop_assert!(!escaped.contains('\n'));
            let chars: Vec<char> = escaped.chars().collect();
            let backslashes_before = |idx: usize| {
                chars[..idx].iter().rev().take_while(|c| **c == '\\').count()
            };
            for (idx, ch) in chars.iter().enumerate() {
                if RESERVED.contains(ch) {
                    prop_assert!(backslashes_before(idx) % 2 == 1, "{escaped}");
                }
            }
            prop_assert!(backslashes_before(chars.len()) % 2 == 0, "{escaped}");
        }
    }
}
