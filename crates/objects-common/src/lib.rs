//! Common utilities for the object exercises.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - deduplicated, colored terminal output for inputs
//!   that are accepted but probably not what the caller meant

pub mod warning;
