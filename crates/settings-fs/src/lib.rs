//! Filesystem layer for settings files
//!
//! Provides whole-file JSON reads and atomic, locked writes. Everything above
//! this crate works on `serde_json::Value` trees and never touches `std::fs`
//! directly.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_json, read_text, write_atomic, write_json_pretty};
