//! Test helpers shared across the datacli crates.
//!
//! [`env`] serialises mutations of the process environment and restores the
//! previous values when guards drop, and builds fixed maps for tests that
//! hand an explicit environment to the parser.

pub mod env;
