/// Case-insensitive substring test using Unicode lowercase folding on both
/// sides. An empty needle matches everything; the needle is not trimmed.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Percent-encode a `mailto:` query component. Unreserved characters
/// (alphanumerics and `-_.!~*'()`) pass through; every other byte of the
/// UTF-8 encoding becomes `%XX`.
pub fn percent_encode_component(text: &str) -> String {
    let mut s = String::with_capacity(text.len());

    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => s.push(byte as char),
            _ => s.push_str(&format!("%{byte:02X}")),
        }
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Ayala Corporation", "ayala"));
        assert!(contains_ignore_case("BDO Unibank, Inc.", "bdo"));
        assert!(contains_ignore_case("ALI", "al"));
        assert!(contains_ignore_case("École Centrale", "école"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Jollibee Foods", "bank"));
        assert!(!contains_ignore_case("", "x"));

        // whitespace is matched literally, not trimmed
        assert!(contains_ignore_case("San Miguel", " mig"));
        assert!(!contains_ignore_case("SanMiguel", " "));
    }

    #[test]
    fn test_percent_encode_component() {
        assert_eq!(percent_encode_component("Hello World!"), "Hello%20World!");
        assert_eq!(percent_encode_component("a\nb"), "a%0Ab");
        assert_eq!(
            percent_encode_component("name=x&y"),
            "name%3Dx%26y"
        );
        assert_eq!(percent_encode_component("₱1.50"), "%E2%82%B11.50");
        assert_eq!(
            percent_encode_component("A-Z_a.z!~*'()"),
            "A-Z_a.z!~*'()"
        );
    }
}
