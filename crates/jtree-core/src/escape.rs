//! The shared escape table for JSON strings.
//!
//! One immutable static mapping serves both directions: the parser resolves
//! escape letters into raw bytes, the generator turns raw bytes back into
//! their two-character escape forms. It is never mutated after
//! initialization, so it is safe to share across arbitrarily many
//! concurrent parse/generate calls.

/// `(escape letter, raw byte)` pairs for the eight single-character escapes.
static ESCAPES: &[(u8, u8)] = &[
    (b'"', b'"'),
    (b'\\', b'\\'),
    (b'/', b'/'),
    (b'b', 0x08),
    (b'f', 0x0C),
    (b'n', b'\n'),
    (b'r', b'\r'),
    (b't', b'\t'),
];

/// Resolve an escape letter (the byte after a backslash) to its raw byte.
/// Returns `None` for letters with no single-character mapping (`u` and
/// everything unrecognized).
pub(crate) fn unescape(letter: u8) -> Option<u8> {
    ESCAPES
        .iter()
        .find(|&&(esc, _)| esc == letter)
        .map(|&(_, raw)| raw)
}

/// Resolve a raw byte to its escape letter, if it has a two-character form.
pub(crate) fn escape(raw: u8) -> Option<u8> {
    ESCAPES
        .iter()
        .find(|&&(_, r)| r == raw)
        .map(|&(esc, _)| esc)
}
