//! gizi-reference
//!
//! Read-only WHO/Kemenkes growth-standard tables: the provider seam the
//! classifiers query, an in-memory store, directory loading, and the
//! lookup rules (age clamping, 0.5 cm height rounding, nearest-height
//! fallback).

pub mod error;
pub mod loader;
pub mod lookup;
pub mod provider;
pub mod sample;
pub mod store;
