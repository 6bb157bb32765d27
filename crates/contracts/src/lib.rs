//! Shared types between the tour booking front-end and the REST backend.
//!
//! Everything here is target independent so it can be unit tested natively
//! and compiled into the wasm front-end unchanged.

pub mod domain;
pub mod shared;
pub mod system;
