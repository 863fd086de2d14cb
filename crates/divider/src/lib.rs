//! # Feedback-Divider Search
//!
//! This crate finds the standard resistor pair(s) that best approximate a
//! target output voltage for the non-inverting feedback topology
//! `Vout = Vfb * (1 + R1/R2)`.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems and depends only on `core-types` and `eseries`.
//! - **Exhaustive Scan:** Every ordered pair drawn (with replacement) from
//!   the range-filtered value set is evaluated. Correctness over speed: the
//!   filtered set tops out at a few hundred values, so the O(n^2) scan is a
//!   few tens of thousands of evaluations at worst.
//! - **Infallible:** The search never errors. An empty result list is the
//!   sole signal that no candidate fell inside the requested range.
//!
//! ## Public API
//!
//! - `find_best_divider`: Range filter plus scan over a standard series.
//! - `scan_pairs`: The bare scan over an explicit resistor slice.

pub mod search;

// Re-export the key functions to create a clean, public-facing API.
pub use search::{find_best_divider, scan_pairs};
