//! Shared primitives for Tallybook.
//!
//! This crate provides cross-cutting leaf utilities used by all other crates:
//! - Lenient numeric parsing for tolerant data entry
//! - Display formatting for report amounts and percentages

pub mod format;
pub mod lenient;

pub use lenient::LenientAmount;
