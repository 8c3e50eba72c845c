//! gizi-core
//!
//! Domain types for anthropometric records: subjects, measurements,
//! WHO/Kemenkes reference rows, calculation results and age derivation.
//! Nothing here touches the filesystem or the clock.

pub mod age;
pub mod error;
pub mod models;
pub mod reference_keys;
