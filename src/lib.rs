//! This crate builds an unbalanced Binary Search Tree (BST) of strings and
//! shows how the order of insertion determines its shape - and therefore how
//! much a lookup costs.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert
//! and find stored records. BSTs are typically defined recursively using the
//! notion of a `Node`. A `Node` will typically store some sort of key (the
//! string that was inserted, for example) and will sometimes have child
//! `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`), and
//! BSTs naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree.
//!
//! ## Insertion order
//!
//! The tree in [`set`] never rebalances itself, on purpose. Insert n distinct
//! words in sorted order and every `Node` hangs off its parent's right child:
//! the "tree" is a linked list of height n and a lookup walks all of it.
//! Insert the same words in a random order and the expected height drops to
//! `O(lg n)`. Insert them median-first from a sorted sequence and the height
//! is exactly `ceil(lg(n + 1))`, the minimum possible. The [`order`] module
//! implements those three strategies; the `minispell` binary times them
//! against real word lists.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod order;
pub mod set;
pub mod words;
