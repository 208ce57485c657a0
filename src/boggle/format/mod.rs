//! Compact binary dictionary format.
//!
//! # Module Organization
//!
//! - [`node`]: the fixed-size record layout and popcount-ranked child lookup
//! - [`encode`]: turns a [`WordSet`](crate::WordSet) into records
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────┐
//! │  record 0       │ ← root
//! ├─────────────────┤
//! │  records 1..k   │ ← root's children, a..z order
//! ├─────────────────┤
//! │  ...            │ ← breadth-first, each node's children contiguous
//! └─────────────────┘
//! ```
//!
//! There is no header: the file is valid when its length is a non-zero
//! multiple of [`RECORD_SIZE`](node::RECORD_SIZE) and every child range lies
//! inside the array.

pub mod encode;
pub mod node;
