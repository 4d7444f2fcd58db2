//! Common test utilities for Muwanx contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated temp directory with model files and a binary runner
//! - Fixtures: reusable model payloads and project files

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;
