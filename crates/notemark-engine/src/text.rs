//! UTF-16 unit indexing over `&str`.
//!
//! Carets coming from text inputs count UTF-16 code units, so every offset
//! in this crate does too. These helpers translate between that index space
//! and Rust strings. Offsets past the end are clamped; a range that splits a
//! surrogate pair yields U+FFFD for the orphaned half.

use std::ops::Range;

/// Length of `s` in UTF-16 units.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// The unit at offset `at`, if any.
pub fn unit_at(s: &str, at: usize) -> Option<u16> {
    s.encode_utf16().nth(at)
}

/// Copies the units in `range` out of `s`.
pub fn slice(s: &str, range: Range<usize>) -> String {
    let units: Vec<u16> = s
        .encode_utf16()
        .skip(range.start)
        .take(range.end.saturating_sub(range.start))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Replaces the units in `range` with `replacement`.
pub fn splice(s: &str, range: Range<usize>, replacement: &str) -> String {
    let units: Vec<u16> = s.encode_utf16().collect();
    let end = range.end.min(units.len());
    let start = range.start.min(end);

    let mut out = Vec::with_capacity(units.len() - (end - start) + replacement.len());
    out.extend_from_slice(&units[..start]);
    out.extend(replacement.encode_utf16());
    out.extend_from_slice(&units[end..]);
    String::from_utf16_lossy(&out)
}

/// Inserts `insertion` at unit offset `at`.
pub fn insert(s: &str, at: usize, insertion: &str) -> String {
    splice(s, at..at, insertion)
}

/// The closest character boundary strictly before `at`, or 0.
///
/// Steps over whole characters, so a caret never lands between the two
/// halves of a surrogate pair.
pub fn prev_boundary(s: &str, at: usize) -> usize {
    let mut prev = 0;
    let mut pos = 0;
    for c in s.chars() {
        if pos >= at {
            break;
        }
        prev = pos;
        pos += c.len_utf16();
    }
    if pos < at { pos } else { prev }
}

/// The closest character boundary strictly after `at`, or the length of `s`.
pub fn next_boundary(s: &str, at: usize) -> usize {
    let mut pos = 0;
    for c in s.chars() {
        pos += c.len_utf16();
        if pos > at {
            return pos;
        }
    }
    pos
}
