//! Property-based tests for the node tuning core.
//!
//! This crate contains proptest-based property tests for verifying
//! invariants of the flavor tuner and the endpoint spec mapper.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p proptests
//!
//! # Run with more test cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p proptests
//!
//! # Run specific test module
//! cargo test -p proptests tuner
//!
//! # Run single test
//! cargo test -p proptests prop_tune_is_deterministic
//! ```
//!
//! ## Test Categories
//!
//! - **Tuner tests**: determinism, hardware echo, tier monotonicity,
//!   flush budget ratios, transaction-log cap
//! - **Endpoint tests**: order and length preservation, port conventions,
//!   equality and hashing

// Re-export tuning for use in test modules
pub use tuning;

/// Shared test strategies and helpers.
pub mod strategies;

#[cfg(test)]
mod tuner;
