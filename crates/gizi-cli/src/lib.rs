//! gizi-cli
//!
//! Configuration and request handling for the `gizi` binary.

pub mod config;
pub mod request;
