/// ASCII-lowercase a token's source bytes into its searchable text.
///
/// Only `A`..=`Z` change; every other byte passes through. Runs handed in
/// by the segmenter are ASCII letters and digits, so the result is always
/// valid UTF-8. Idempotent: normalizing twice equals normalizing once.
#[must_use]
pub fn normalize(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| b.to_ascii_lowercase() as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_ascii_letters_only() {
        assert_eq!(normalize(b"Endpoint"), "endpoint");
        assert_eq!(normalize(b"API"), "api");
        assert_eq!(normalize(b"123"), "123");
        assert_eq!(normalize(b"mixedCASE42"), "mixedcase42");
    }

    #[test]
    fn idempotent() {
        for input in [&b"HelloWorld"[..], b"already_lower", b"ID123"] {
            let once = normalize(input);
            let twice = normalize(once.as_bytes());
            assert_eq!(once, twice);
        }
    }
}
