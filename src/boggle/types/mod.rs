//! Foundational data structures, error types, and the dictionary capability.

pub mod dictionary;
pub mod error;
pub mod models;
