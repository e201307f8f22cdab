//! # inspect2run-common
//!
//! Shared error definitions, translation options, and constants used
//! across the inspect2run workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate.

pub mod config;
pub mod constants;
pub mod error;
