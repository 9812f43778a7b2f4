//! This crate exposes a classic, deliberately unbalanced Binary Search
//! Tree (BST) mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, delete, and enumerate stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of the BST
//! in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    strictly less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than *or equal to* its own value. Inserting a value that is
//!    already present therefore keeps both copies, with the newer one in
//!    the right subtree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called
//! > "leaf nodes".
//!
//! The ordering invariants mean an in-order walk (left subtree, node,
//! right subtree) visits values in sorted order, which is how
//! [`Tree::inorder`][owned::Tree::inorder] yields them. The tree performs
//! no rebalancing: lookups and mutations take `O(height)`, and inserting
//! values in sorted order degrades the height to the node count. That
//! worst case is kept observable on purpose, since shape questions
//! (depth, full-node counts, mirror symmetry) are half of what this crate
//! is for.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod owned;

#[cfg(test)]
pub(crate) mod test;
