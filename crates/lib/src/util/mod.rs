//! Shared utilities.
//!
//! Test doubles for the runner and filesystem capabilities.

#[cfg(test)]
pub mod testutil;
