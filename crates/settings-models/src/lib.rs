//! Settings models for the vision pipeline
//!
//! Two settings roots, each stored and updated independently:
//!
//! - [`AppSettings`]: detection and tracking parameters, freely updatable
//!   at runtime
//! - [`SystemSettings`]: operational parameters (NMEA endpoint) that
//!   write-back never overwrites

pub mod app;
pub mod system;

pub use app::{AppSettings, CnnNetwork, ObjectDetection, Tracker};
pub use system::{Nmea, SystemSettings};
pub use settings_core::{Settings, SettingsStore, UpdateReport};
