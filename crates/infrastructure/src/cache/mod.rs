//! Persistent response cache
//!
//! One file per cache key under a root directory. File names are derived
//! from keys by [`sanitize_key`].

mod file_cache;

pub use file_cache::FileCacheStore;

/// Extension of committed cache entries
pub const ENTRY_EXTENSION: &str = "entry";

/// Extension of in-flight temporary files
pub const TEMP_EXTENSION: &str = "tmp";

/// Map a cache key to a file-name-safe string
///
/// Bytes in `[a-z0-9-]` pass through; every other byte, including `%` and
/// upper-case letters, becomes `%XX`. The mapping is injective, and escaping
/// upper case keeps case-insensitive filesystems from folding two keys into
/// one file.
#[must_use]
pub fn sanitize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for b in key.bytes() {
        match b {
            b'a'..=b'z' | b'0'..=b'9' | b'-' => out.push(char::from(b)),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_pass_through() {
        assert_eq!(sanitize_key("news-zurich-en"), "news-zurich-en");
        assert_eq!(sanitize_key("sunshine-v2"), "sunshine-v2");
    }

    #[test]
    fn special_bytes_are_escaped() {
        assert_eq!(sanitize_key("a/b"), "a%2Fb");
        assert_eq!(sanitize_key("a_b.c"), "a%5Fb%2Ec");
        assert_eq!(sanitize_key("100%"), "100%25");
        assert_eq!(sanitize_key("Zurich"), "%5Aurich");
        assert_eq!(sanitize_key("ü"), "%C3%BC");
    }

    #[test]
    fn case_variants_map_to_distinct_names() {
        assert_ne!(sanitize_key("News"), sanitize_key("news"));
        assert_ne!(
            sanitize_key("News").to_ascii_lowercase(),
            sanitize_key("news").to_ascii_lowercase()
        );
    }

    #[test]
    fn escape_sequences_do_not_collide_with_literals() {
        assert_ne!(sanitize_key("%2F"), sanitize_key("/"));
    }
}
