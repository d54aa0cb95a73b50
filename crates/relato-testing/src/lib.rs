//! Testing infrastructure for relato integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated data directory, SDK client and CLI runner
//! - `assertions`: checks for section order and section state
//! - `fixtures`: draft files and sample image bytes

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
