//! Skeleton normalization.
//!
//! A skeleton replaces every code point of its input with the prototype of
//! its confusability class. The mapping is one-to-one: the skeleton has
//! exactly as many symbols as the input has code points, so a confusable
//! swap such as `0`/`O` never shifts the rest of the string.
//!
//! Symbols are stored as `u32` rather than `char` so that UTF-16 input with
//! unpaired surrogates can be normalized too. Such surrogates are not in the
//! table and pass through as their own code unit value.

use std::fmt;

use smallvec::SmallVec;

use crate::confusables::ConfusableTable;

/// Normalized symbol sequence of one input string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Skeleton {
    symbols: SmallVec<[u32; 32]>,
}

impl Skeleton {
    /// Skeleton of `s` under the global table.
    pub fn new(s: &str) -> Self {
        let table = ConfusableTable::global();
        let symbols: SmallVec<[u32; 32]> =
            s.chars().map(|c| table.representative(c as u32)).collect();
        tracing::trace!(input_len = symbols.len(), "built skeleton");
        Self { symbols }
    }

    /// Skeleton of UTF-16 code units.
    ///
    /// Well-formed surrogate pairs are decoded into one code point. An
    /// unpaired surrogate is kept as a single symbol equal to its code unit,
    /// so decoding never fails and lengths stay comparable.
    pub fn from_utf16(units: &[u16]) -> Self {
        let table = ConfusableTable::global();
        let symbols: SmallVec<[u32; 32]> = char::decode_utf16(units.iter().copied())
            .map(|r| match r {
                Ok(c) => table.representative(c as u32),
                Err(e) => u32::from(e.unpaired_surrogate()),
            })
            .collect();
        tracing::trace!(input_len = symbols.len(), "built skeleton from utf-16");
        Self { symbols }
    }

    /// Number of symbols (equal to the input's code point count).
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the skeleton is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols, in input order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.symbols
    }

    /// String form; symbols that are not scalar values become U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        self.symbols
            .iter()
            .map(|&s| char::from_u32(s).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl AsRef<[u32]> for Skeleton {
    fn as_ref(&self) -> &[u32] {
        self.as_slice()
    }
}

impl fmt::Display for Skeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl From<&str> for Skeleton {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Skeleton of `s` as a `String`.
///
/// ```rust
/// use confusable_distance::skeleton;
///
/// assert_eq!(skeleton("HELL0"), "HELLO");
/// assert_eq!(skeleton("adm1n"), "admln");
/// ```
pub fn skeleton(s: &str) -> String {
    let table = ConfusableTable::global();
    s.chars().map(|c| table.representative_char(c)).collect()
}
