//! Edit distance over symbol sequences.
//!
//! Plain Levenshtein distance with unit costs: one insertion, deletion or
//! substitution each cost 1. There is no transposition discount and no
//! weighted substitution table; confusable characters are handled before this
//! stage by mapping both inputs to skeletons.
//!
//! The DP keeps two rows sized by the shorter input, so memory is
//! `O(min(n, m))` while time stays `O(n * m)`. Common prefixes and suffixes
//! are trimmed first since they never contribute edits.

use smallvec::SmallVec;

/// Strip common prefix and suffix from two sequences.
///
/// Returns `(prefix_len, remaining_a, remaining_b)`: the length of the shared
/// prefix and how many elements of each side remain once both the prefix and
/// the shared suffix are removed. The prefix and suffix never overlap.
#[inline]
pub fn strip_common_affixes<T: PartialEq>(a: &[T], b: &[T]) -> (usize, usize, usize) {
    let len_a = a.len();
    let len_b = b.len();
    let min_len = len_a.min(len_b);

    let prefix_len = a.iter().zip(b).take_while(|(x, y)| x == y).count();

    if prefix_len == min_len {
        // One side is a prefix of the other
        return (prefix_len, len_a - prefix_len, len_b - prefix_len);
    }

    let suffix_len = a[prefix_len..]
        .iter()
        .rev()
        .zip(b[prefix_len..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    (
        prefix_len,
        len_a - prefix_len - suffix_len,
        len_b - prefix_len - suffix_len,
    )
}

/// Levenshtein distance between two sequences.
///
/// # Example
///
/// ```rust
/// use confusable_distance::distance::levenshtein;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(levenshtein(&a, &b), 3);
/// assert_eq!(levenshtein::<u32>(&[], &[1, 2, 3]), 3);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (prefix, len_a, len_b) = strip_common_affixes(a, b);

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let a = &a[prefix..prefix + len_a];
    let b = &b[prefix..prefix + len_b];

    // Rows run over the shorter side
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = inner.len();

    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = SmallVec::from_elem(0, n + 1);

    for (i, outer_item) in outer.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, inner_item) in inner.iter().enumerate() {
            let cost = usize::from(outer_item != inner_item);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Levenshtein distance between two strings, compared by `char`.
///
/// No confusable normalization is applied; see
/// [`confusable_distance`](crate::confusable_distance) for that.
///
/// ```rust
/// use confusable_distance::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("HELLO", "HELL0"), 1);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();
    levenshtein(&source_chars, &target_chars)
}
