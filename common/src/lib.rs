//! Shared models for `cidrcheck`.
//!
//! Holds the decoded network range and candidate address, the address
//! arithmetic the membership walk needs, and the run configuration.

pub mod config;
pub mod error;
pub mod network;
