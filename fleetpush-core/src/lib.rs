//! Fleetpush Core
//!
//! Core types and abstractions for the fleetpush upgrade tool.
//!
//! This crate contains:
//! - Domain types: Core business entities (PushRequest, PushJob, etc.)
//! - DTOs: Data transfer objects exchanged with the platform data API
//! - Poller: the bounded-duration status polling state machine

pub mod domain;
pub mod dto;
pub mod poll;
