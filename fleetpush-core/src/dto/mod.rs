//! Data Transfer Objects for the platform data API
//!
//! Lightweight representations of domain entities optimized for the wire.
//! Domain records come back from the API in full; these types cover the
//! create/update direction and per-record batch results.

pub mod push;
