//! This crate is part of `closure`,
//! a forward-chaining RDFS and OWL-RL reasoner in Rust.
//!
//! It provides [`TripleStore`], an in-memory set of triples where
//! * every distinct [`Term`](closure_term::Term) is interned once in a [`TermIndex`],
//! * triples are stored as `[usize; 3]` in a [`TripleIndex`],
//!   with a hash set for membership and three sorted indexes (`spo`, `pos`, `osp`)
//!   so that any combination of bound positions is answered without a full scan.
#![deny(missing_docs)]

mod _range_n;
mod bgp;
pub use bgp::*;
pub mod index;
pub use index::{TermIndex, TripleIndex};
mod store;
pub use store::*;

#[cfg(test)]
mod test;
