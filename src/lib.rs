//! An ordered set built on a B+ tree.
//!
//! This crate provides [`BPTreeSet`], a sorted set container with the same
//! observable behaviour as the standard library's `BTreeSet` for the
//! operations it offers: unique keys, ordered iteration, and logarithmic
//! insertion, removal, and lookup.
//!
//! # Example
//!
//! ```
//! use bptree_set::BPTreeSet;
//!
//! let mut primes: BPTreeSet<i32> = BPTreeSet::new();
//! primes.insert(5);
//! primes.insert(2);
//! primes.insert(3);
//! primes.insert(2); // duplicates are rejected
//!
//! assert_eq!(primes.len(), 3);
//! assert!(primes.contains(&3));
//!
//! // Iteration is always in ascending order.
//! let ordered: Vec<_> = primes.iter().copied().collect();
//! assert_eq!(ordered, [2, 3, 5]);
//! ```
//!
//! # Implementation
//!
//! The set is a B+ tree: all elements live in leaf nodes, internal nodes
//! hold separator keys only, and the leaves form a forward-linked chain so
//! that ordered iteration never revisits internal nodes. The branching
//! parameter `N` is a const generic; every non-root node holds between `N`
//! and `2N` keys. Smaller `N` makes the tree taller, larger `N` trades
//! height for wider in-node shifts. The default `N = 2` keeps nodes small
//! enough that the structure is easy to inspect with [`BPTreeSet::dump`].
//!
//! # Features
//!
//! - **`no_std` compatible** - only requires `alloc`
//! - **Ordered, duplicate-free** - equivalence is derived from [`Ord`], no
//!   `Hash` or direct equality requirement on the element type
//! - **O(1)-per-step ordered iteration** - via the linked leaf chain

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod raw;

pub mod bptree_set;

pub use bptree_set::BPTreeSet;
