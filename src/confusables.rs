//! Static confusability table.
//!
//! The table is compiled by `build.rs` from `assets/data/confusables.txt`, a
//! single-code-point subset of the UTS #39 confusables data. Each entry maps a
//! source code point to the prototype of its confusability class; code points
//! with no entry are their own prototype.
//!
//! Two code points are in the same class exactly when they share a prototype,
//! so the table describes an equivalence partition. `build.rs` guarantees that
//! prototypes are fixed points, which makes lookup idempotent.
//!
//! The table is built once on first use and shared read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use confusable_distance::confusables::ConfusableTable;
//!
//! let table = ConfusableTable::global();
//! assert_eq!(table.is_confusable('0'), Some('O'));
//! assert_eq!(table.is_confusable('O'), None);
//! assert!(table.are_confusable("HELL0", "HELLO"));
//! ```

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

include!(concat!(env!("OUT_DIR"), "/confusables_gen.rs"));

static GLOBAL_TABLE: Lazy<ConfusableTable> = Lazy::new(ConfusableTable::build);

/// Mapping from a code point to the prototype of its confusability class.
#[derive(Debug)]
pub struct ConfusableTable {
    /// Prototypes for the ASCII range, indexed directly.
    ascii: [u32; 128],
    /// Prototypes for everything outside ASCII.
    map: FxHashMap<u32, u32>,
}

impl ConfusableTable {
    /// The process-wide table.
    ///
    /// Concurrent first callers block until construction finishes; every
    /// later call is a plain pointer read.
    #[inline]
    pub fn global() -> &'static ConfusableTable {
        &GLOBAL_TABLE
    }

    fn build() -> Self {
        let mut ascii = [0u32; 128];
        for (i, slot) in (0u32..).zip(ascii.iter_mut()) {
            *slot = i;
        }

        let mut map = FxHashMap::default();
        map.reserve(CONFUSABLE_COUNT);

        for &(src, tgt) in CONFUSABLE_TABLE {
            if src < 128 {
                ascii[src as usize] = tgt;
            } else {
                map.insert(src, tgt);
            }
        }

        tracing::debug!(
            entries = CONFUSABLE_COUNT,
            version = CONFUSABLES_VERSION,
            "built confusable table"
        );

        Self { ascii, map }
    }

    /// Prototype of the class containing `cp`.
    ///
    /// Total over all `u32` values: anything not in the table, including
    /// unpaired surrogates and out-of-range values, maps to itself.
    #[inline]
    pub fn representative(&self, cp: u32) -> u32 {
        if cp < 128 {
            return self.ascii[cp as usize];
        }
        self.map.get(&cp).copied().unwrap_or(cp)
    }

    /// Prototype of `ch`, or `ch` itself when it has no confusable mapping.
    #[inline]
    pub fn representative_char(&self, ch: char) -> char {
        // Prototypes are validated as scalar values by build.rs.
        char::from_u32(self.representative(ch as u32)).unwrap_or(ch)
    }

    /// The prototype `ch` is confused with, if it differs from `ch`.
    pub fn is_confusable(&self, ch: char) -> Option<char> {
        let rep = self.representative_char(ch);
        (rep != ch).then_some(rep)
    }

    /// Whether two strings have the same skeleton.
    pub fn are_confusable(&self, a: &str, b: &str) -> bool {
        a.chars().count() == b.chars().count()
            && a.chars()
                .zip(b.chars())
                .all(|(x, y)| self.representative(x as u32) == self.representative(y as u32))
    }

    /// Every member of the confusability class of `ch`, prototype first,
    /// remaining members in code point order.
    pub fn class_of(&self, ch: char) -> Vec<char> {
        let rep = self.representative(ch as u32);
        let mut members: SmallVec<[u32; 16]> = CONFUSABLE_TABLE
            .iter()
            .filter(|&&(_, tgt)| tgt == rep)
            .map(|&(src, _)| src)
            .collect();
        members.sort_unstable();

        std::iter::once(rep)
            .chain(members)
            .filter_map(char::from_u32)
            .collect()
    }

    /// Number of non-identity entries.
    pub fn len(&self) -> usize {
        CONFUSABLE_COUNT
    }

    /// Always `false` for a compiled table; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        CONFUSABLE_COUNT == 0
    }

    /// Version of the confusables dataset this table was compiled from.
    ///
    /// Changing the dataset changes distances, so callers that persist
    /// results should record this alongside them.
    pub fn version(&self) -> &'static str {
        CONFUSABLES_VERSION
    }
}
