//! # E-Series Value Generation
//!
//! This crate produces the candidate resistor value sets for the standard
//! IEC 60063 series (E12, E24, E96) and renders magnitudes in the usual
//! engineering short form (470.0R, 4.7K, 4.7M, 4.7G).
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems and depends only on `core-types` (Layer 0).
//! - **Stateless Generation:** `generate` is a pure function of the requested
//!   `Series`; the significand and decade tables are process-wide constants.
//!
//! ## Public API
//!
//! - `generate`: Returns the sorted, deduplicated value set for a series.
//! - `format_resistance`: Engineering-notation rendering of a magnitude.

pub mod format;
pub mod generator;
pub mod tables;

// Re-export the key functions to create a clean, public-facing API.
pub use format::format_resistance;
pub use generator::generate;
