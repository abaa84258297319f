//! Filename sanitization
//!
//! Strips unsafe characters from user-supplied path segments before they
//! are used to look up stored files.

/// Remove every character outside `[A-Za-z0-9._-]`.
///
/// Total and idempotent; never fails. An input that sanitizes to the
/// empty string is for the caller to reject.
pub fn sanitize_filename(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_allowed_characters() {
        assert_eq!(
            sanitize_filename("photo_01.final-v2.jpg"),
            "photo_01.final-v2.jpg"
        );
    }

    #[test]
    fn strips_path_separators_and_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "....etcpasswd");
        assert_eq!(sanitize_filename("..\\windows\\system32"), "..windowssystem32");
    }

    #[test]
    fn strips_percent_encoding_and_spaces() {
        assert_eq!(
            sanitize_filename("..%2F..%2Fetc%2Fpasswd"),
            "..2F..2Fetc2Fpasswd"
        );
        assert_eq!(sanitize_filename("my photo!.png"), "myphoto.png");
    }

    #[test]
    fn empty_and_all_stripped_inputs_map_to_empty() {
        assert_eq!(sanitize_filename(""), "");
        assert_eq!(sanitize_filename("///"), "");
        assert_eq!(sanitize_filename("<>:?*|"), "");
    }

    #[test]
    fn output_is_idempotent() {
        for input in ["../a/b", "n\u{e4}me.png", "a b c", "..", "%00null", "ok.jpg"] {
            let once = sanitize_filename(input);
            assert_eq!(sanitize_filename(&once), once);
        }
    }

    #[test]
    fn output_contains_only_allowed_characters() {
        for input in ["../../x", "a\0b.png", "\u{1F600}.jpg", "q?s=1&t=2"] {
            let out = sanitize_filename(input);
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')),
                "unexpected character in {:?}",
                out
            );
        }
    }
}
