//! Core domain types
//!
//! This module contains the domain structures shared across fleetpush crates.
//! These types mirror the records the platform data API holds; the client
//! reads and writes them but never owns their lifecycle.

pub mod package;
pub mod push;
