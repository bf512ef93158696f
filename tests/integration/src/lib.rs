//! Integration test utilities for the guild ban service
//!
//! This crate provides an in-process stand-in for the game server and
//! helpers for wiring it to a registry backed by the in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
