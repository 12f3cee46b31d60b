//! A string set backed by an unbalanced BST. Similar to the standard library's
//! `BTreeSet<String>` except keeping two children per parent instead of an
//! array based `BTree` - and never rebalancing, so the insertion order alone
//! decides the shape.
//!
//! # Examples
//!
//! ```
//! use minispell::set::StringSet;
//!
//! let mut set = StringSet::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains("banana"));
//!
//! set.insert("banana");
//! assert!(set.contains("banana"));
//!
//! // Inserting the same word again is a no-op.
//! set.insert("banana");
//! assert_eq!(set.len(), 1);
//!
//! // Iteration is in sorted order, whatever order we inserted in.
//! set.insert("apple");
//! set.insert("cherry");
//! let words: Vec<&str> = set.iter().collect();
//! assert_eq!(words, ["apple", "banana", "cherry"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;

/// A set of strings stored in a Binary Search Tree that never rebalances.
///
/// Every node is exclusively owned by its parent's child slot, so the
/// structure is acyclic by construction and needs no reference counting and
/// no parent pointers.
pub struct StringSet {
    root: Option<Box<Node>>,
    count: usize,
}

struct Node {
    key: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(key: String) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

impl Default for StringSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StringSet {
    // The derived drop would recurse through the `Box` chain; a degenerate
    // tree of a whole dictionary is deep enough to overflow the call stack.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl fmt::Debug for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl StringSet {
    /// Generates a new, empty `StringSet`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// Inserts the given word into the set. Inserting a word that is already
    /// present leaves the set (and its shape) untouched.
    ///
    /// Keys compare with ordinary byte-lexicographic, case-sensitive `str`
    /// ordering. No rebalancing happens here, ever.
    ///
    /// # Examples
    ///
    /// ```
    /// use minispell::set::StringSet;
    ///
    /// let mut set = StringSet::new();
    ///
    /// set.insert("word");
    /// set.insert("word");
    ///
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, word: impl Into<String>) {
        let word = word.into();
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match word.as_str().cmp(node.key.as_str()) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Equal => return,
                Ordering::Greater => slot = &mut node.right,
            }
        }
        *slot = Some(Node::new(word));
        self.count += 1;
    }

    /// Returns whether the given word is in the set. Costs `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minispell::set::StringSet;
    ///
    /// let mut set = StringSet::new();
    /// set.insert("word");
    ///
    /// assert!(set.contains("word"));
    /// assert!(!set.contains("sword"));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match word.cmp(n.key.as_str()) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node = n.right.as_deref(),
            }
        }
        false
    }

    /// The number of distinct words stored. `O(1)`.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns whether the set holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The number of nodes on the longest path from the root to a leaf. An
    /// empty tree has height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        // Walked with an explicit stack for the same reason as `drop`.
        let mut tallest = 0;
        let mut pending = Vec::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 1));
        }
        while let Some((node, depth)) = pending.pop() {
            tallest = tallest.max(depth);
            if let Some(left) = node.left.as_deref() {
                pending.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, depth + 1));
            }
        }
        tallest
    }

    /// Iterates over the words in ascending order. The iterator is lazy,
    /// borrows the tree, and can be restarted by calling `iter` again.
    ///
    /// # Examples
    ///
    /// ```
    /// use minispell::set::StringSet;
    ///
    /// let mut set = StringSet::new();
    /// for word in ["cherry", "apple", "banana"] {
    ///     set.insert(word);
    /// }
    ///
    /// assert!(set.iter().eq(["apple", "banana", "cherry"]));
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// The word at the given position (0-indexed) among the stored words in
    /// sorted order, or `None` when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minispell::set::StringSet;
    ///
    /// let mut set = StringSet::new();
    /// for word in ["e", "b", "d", "a", "c"] {
    ///     set.insert(word);
    /// }
    ///
    /// // The median word.
    /// assert_eq!(set.select(set.len() / 2), Some("c"));
    /// assert_eq!(set.select(5), None);
    /// ```
    pub fn select(&self, index: usize) -> Option<&str> {
        self.iter().nth(index)
    }

    /// Computes shape statistics for the current tree.
    pub fn statistics(&self) -> Statistics {
        let height = self.height();
        // usize::ilog2 floors, so this is floor(lg(count + 1)).
        let min_height = (self.count + 1).ilog2() as usize;
        Statistics {
            nodes: self.count,
            height,
            min_height,
            excess_height: height - min_height,
        }
    }

    /// Writes a one-line statistics report to the given sink.
    pub fn show_statistics(&self, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "{}", self.statistics())
    }
}

impl<'a> IntoIterator for &'a StringSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An in-order iterator over a [`StringSet`], yielding `&str` in ascending
/// order.
///
/// Rather than parent pointers, this keeps an explicit stack of the nodes
/// whose key (and right subtree) are still unvisited.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    /// Pushes `node` and the chain of its leftmost descendants. The deepest
    /// of them holds the smallest unvisited key.
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.key.as_str())
    }
}

/// Shape statistics for a [`StringSet`], as reported by
/// [`StringSet::statistics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// The number of words stored, i.e. [`StringSet::len`].
    pub nodes: usize,
    /// The actual tree height, i.e. [`StringSet::height`].
    pub height: usize,
    /// `floor(lg(nodes + 1))` - the fewest levels that could hold this many
    /// nodes.
    pub min_height: usize,
    /// `height - min_height`: how many levels taller the tree is than a full
    /// tree of the same size. 0 means perfectly balanced.
    pub excess_height: usize,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, height {} (minimum possible {}, {} excess level{})",
            self.nodes,
            self.height,
            self.min_height,
            self.excess_height,
            if self.excess_height == 1 { "" } else { "s" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(words: &[&str]) -> StringSet {
        let mut set = StringSet::new();
        for word in words {
            set.insert(*word);
        }
        set
    }

    #[test]
    fn empty_set() {
        let set = StringSet::new();

        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.height(), 0);
        assert!(!set.contains("anything"));
        assert_eq!(set.iter().next(), None);
        assert_eq!(set.select(0), None);
    }

    #[test]
    fn single_node() {
        let set = set_of(&["only"]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.height(), 1);
        assert!(set.contains("only"));
        assert_eq!(set.select(0), Some("only"));
        assert_eq!(set.select(1), None);
    }

    #[test]
    fn root_and_both_children() {
        let set = set_of(&["b", "a", "c"]);

        let root = set.root.as_deref().unwrap();
        assert_eq!(root.key, "b");
        assert_eq!(root.left.as_deref().unwrap().key, "a");
        assert_eq!(root.right.as_deref().unwrap().key, "c");

        assert_eq!(set.height(), 2);
        assert!(set.iter().eq(["a", "b", "c"]));
        assert!(set.contains("a"));
        assert!(!set.contains("z"));
    }

    #[test]
    fn sorted_insertion_degenerates_into_a_chain() {
        let set = set_of(&["a", "b", "c", "d"]);

        // Every node is its parent's right child.
        let mut node = set.root.as_deref();
        let mut keys = Vec::new();
        while let Some(n) = node {
            assert!(n.left.is_none());
            keys.push(n.key.as_str());
            node = n.right.as_deref();
        }
        assert_eq!(keys, ["a", "b", "c", "d"]);
        assert_eq!(set.height(), 4);
    }

    #[test]
    fn reinserting_changes_nothing() {
        let mut set = set_of(&["m", "f", "t", "a"]);
        let words_before: Vec<String> = set.iter().map(String::from).collect();
        let height_before = set.height();

        set.insert("m");
        set.insert("a");

        assert_eq!(set.len(), 4);
        assert_eq!(set.height(), height_before);
        assert!(set.iter().eq(words_before.iter().map(String::as_str)));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let set = set_of(&["Word"]);

        assert!(set.contains("Word"));
        assert!(!set.contains("word"));
    }

    #[test]
    fn iteration_restarts_from_the_top() {
        let set = set_of(&["b", "a", "c"]);

        for _ in 0..3 {
            assert!(set.iter().eq(["a", "b", "c"]));
        }
        // Iterating must not have mutated anything.
        assert_eq!(set.len(), 3);
        assert_eq!(set.height(), 2);
    }

    #[test]
    fn select_finds_the_median() {
        let set = set_of(&["e", "b", "d", "a", "c"]);

        assert_eq!(set.select(set.len() / 2), Some("c"));
        assert_eq!(set.select(0), Some("a"));
        assert_eq!(set.select(4), Some("e"));
        assert_eq!(set.select(5), None);
        assert_eq!(set.select(usize::MAX), None);
    }

    #[test]
    fn statistics_of_a_chain() {
        let set = set_of(&["a", "b", "c", "d", "e", "f", "g"]);
        let stats = set.statistics();

        assert_eq!(
            stats,
            Statistics {
                nodes: 7,
                height: 7,
                min_height: 3,
                excess_height: 4,
            }
        );
        assert_eq!(
            stats.to_string(),
            "7 nodes, height 7 (minimum possible 3, 4 excess levels)"
        );
    }

    #[test]
    fn statistics_of_an_empty_tree() {
        let stats = StringSet::new().statistics();

        assert_eq!(
            stats,
            Statistics {
                nodes: 0,
                height: 0,
                min_height: 0,
                excess_height: 0,
            }
        );
    }

    #[test]
    fn show_statistics_writes_to_the_sink() {
        let set = set_of(&["b", "a", "c"]);
        let mut out = Vec::new();

        set.show_statistics(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3 nodes, height 2 (minimum possible 2, 0 excess levels)\n"
        );
    }

    #[test]
    fn long_chains_overflow_nothing() {
        // Build the worst-case right spine directly; inserting it one word
        // at a time would be quadratic.
        let mut set = StringSet::new();
        for i in (0..100_000).rev() {
            set.root = Some(Box::new(Node {
                key: format!("{:06}", i),
                left: None,
                right: set.root.take(),
            }));
            set.count += 1;
        }

        assert_eq!(set.height(), 100_000);
        assert_eq!(set.select(set.len() / 2), Some("050000"));
        drop(set);
    }
}
