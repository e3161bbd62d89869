//! CLI command implementations.

pub mod search;
pub mod serve;
