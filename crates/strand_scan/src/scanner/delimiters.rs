//! Delimiter sets accepted by the scanner.
//!
//! Single characters and literal substrings share one trait so that `read_until`/`read_through` need not be
//! duplicated per delimiter flavor. Collections test their members in order and report the first match.

/// A set of delimiters that can terminate a scan.
///
/// After every consumed byte the scanner passes the bytes consumed so far by the current scan. If that text
/// now ends with a delimiter, the implementation returns the delimiter's length in bytes.
///
/// ## Notes
/// - Character delimiters are compared byte-wise using the Latin-1 mapping the scanner uses when surfacing
///   bytes as `char`s. Characters above `U+00FF` therefore never match.
/// - Substring delimiters are compared against the raw UTF-8 bytes, so non-ASCII literals work as expected.
/// - The empty string never matches. A set containing only empty strings behaves like an empty set.
///
/// ## Examples
/// ```rust
/// use strand_scan::Delimiters;
///
/// assert_eq!(' '.matched_len(b"hello "), Some(1));
/// assert_eq!(["->", "=>"].matched_len(b"a =>"), Some(2));
/// assert_eq!("--".matched_len(b"a -"), None);
/// ```
pub trait Delimiters {
    /// Return the byte length of the delimiter that `consumed` ends with, if any.
    fn matched_len(&self, consumed: &[u8]) -> Option<usize>;
}

impl Delimiters for char {
    fn matched_len(&self, consumed: &[u8]) -> Option<usize> {
        consumed
            .last()
            .is_some_and(|&byte| char::from(byte) == *self)
            .then_some(1)
    }
}

impl Delimiters for str {
    fn matched_len(&self, consumed: &[u8]) -> Option<usize> {
        (!self.is_empty() && consumed.ends_with(self.as_bytes())).then_some(self.len())
    }
}

impl Delimiters for String {
    fn matched_len(&self, consumed: &[u8]) -> Option<usize> {
        self.as_str().matched_len(consumed)
    }
}

impl<T: Delimiters> Delimiters for [T] {
    fn matched_len(&self, consumed: &[u8]) -> Option<usize> {
        self.iter().find_map(|delim| delim.matched_len(consumed))
    }
}

impl<T: Delimiters, const N: usize> Delimiters for [T; N] {
    fn matched_len(&self, consumed: &[u8]) -> Option<usize> {
        self.as_slice().matched_len(consumed)
    }
}

impl<T: Delimiters> Delimiters for Vec<T> {
    fn matched_len(&self, consumed: &[u8]) -> Option<usize> {
        self.as_slice().matched_len(consumed)
    }
}

impl<T: Delimiters + ?Sized> Delimiters for &T {
    fn matched_len(&self, consumed: &[u8]) -> Option<usize> {
        (**self).matched_len(consumed)
    }
}
