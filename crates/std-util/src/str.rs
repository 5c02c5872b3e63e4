/// String search helpers used when scanning SQL text.
pub trait StrUtil {
    /// Byte offset of the first ASCII case-insensitive occurrence of `needle`
    /// at or after `from`.
    fn find_ignore_ascii_case(&self, needle: &str, from: usize) -> Option<usize>;

    /// True when `needle` found at `pos` is not glued to identifier
    /// characters on either side.
    fn is_word_at(&self, pos: usize, len: usize) -> bool;
}

impl StrUtil for str {
    fn find_ignore_ascii_case(&self, needle: &str, from: usize) -> Option<usize> {
        let haystack = self.as_bytes();
        let needle = needle.as_bytes();

        if needle.is_empty() || from > haystack.len() || needle.len() > haystack.len() - from {
            return None;
        }

        (from..=haystack.len() - needle.len())
            .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
    }

    fn is_word_at(&self, pos: usize, len: usize) -> bool {
        fn is_ident(b: u8) -> bool {
            b.is_ascii_alphanumeric() || b == b'_'
        }

        let bytes = self.as_bytes();
        let before = pos == 0 || !is_ident(bytes[pos - 1]);
        let after = pos + len >= bytes.len() || !is_ident(bytes[pos + len]);
        before && after
    }
}
