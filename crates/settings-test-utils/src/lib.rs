//! Shared test utilities for the settings workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`dir`]: [`TestDir`] fixture for override, update and schema files

pub mod dir;

pub use dir::TestDir;
