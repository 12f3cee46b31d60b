//! Insertion orders for filling a [`StringSet`].
//!
//! The tree never rebalances itself, so the order chosen here fully
//! determines its shape: as-read insertion of sorted input produces a
//! degenerate chain, a shuffle gives an `O(lg n)` expected height, and
//! median-first insertion of the sorted words guarantees the minimum
//! possible height.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::set::StringSet;

/// Inserts the words in exactly the order they appear in the vector.
///
/// If the source was already sorted this builds a fully degenerate tree of
/// height `words.len()`.
pub fn insert_as_read(set: &mut StringSet, words: Vec<String>) {
    for word in words {
        set.insert(word);
    }
}

/// Applies a uniform random permutation to the words, then inserts them in
/// that order.
///
/// The RNG is passed in rather than created here so that callers who want a
/// reproducible shape (tests, benches) can hand over a seeded generator while
/// the driver uses [`rand::thread_rng`].
pub fn insert_shuffled(set: &mut StringSet, mut words: Vec<String>, rng: &mut impl Rng) {
    words.shuffle(rng);
    insert_as_read(set, words);
}

/// Sorts the words, then inserts the median of each sub-range before
/// recursing into the halves on either side of it.
///
/// For n distinct words this guarantees a height of exactly
/// `ceil(lg(n + 1))` - the minimum possible - with no randomness involved.
pub fn insert_balanced(set: &mut StringSet, mut words: Vec<String>) {
    words.sort_unstable();
    insert_median_first(set, &mut words);
}

/// Recursion depth is `O(lg n)` since each call halves the range.
fn insert_median_first(set: &mut StringSet, words: &mut [String]) {
    if words.is_empty() {
        return;
    }
    let mid = words.len() / 2;
    set.insert(std::mem::take(&mut words[mid]));
    let (left, right) = words.split_at_mut(mid);
    insert_median_first(set, left);
    insert_median_first(set, &mut right[1..]);
}
