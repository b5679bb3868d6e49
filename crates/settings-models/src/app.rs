//! Application settings: object detection and tracking

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use settings_core::{FieldDescriptor, SchemaModel, Settings};
use std::fmt;

/// CNN network options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CnnNetwork {
    #[default]
    Dan,
    Ahoy,
    Yolo,
    Cerulean,
}

impl CnnNetwork {
    pub const ALL: &'static [&'static str] = &["DAN", "AHOY", "YOLO", "CERULEAN"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dan => "DAN",
            Self::Ahoy => "AHOY",
            Self::Yolo => "YOLO",
            Self::Cerulean => "CERULEAN",
        }
    }
}

impl fmt::Display for CnnNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object detection configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ObjectDetection {
    #[schemars(extend("updatable" = true))]
    pub cnn_network: CnnNetwork,

    /// Smallest object, in pixels, reported by the detector
    #[schemars(range(min = 0))]
    #[schemars(extend("updatable" = true))]
    pub min_object_size: u32,

    #[schemars(range(min = 0.0, max = 1.0))]
    #[schemars(extend("updatable" = true))]
    pub cnn_confidence_threshold: f64,
}

impl Default for ObjectDetection {
    fn default() -> Self {
        Self {
            cnn_network: CnnNetwork::Dan,
            min_object_size: 6,
            cnn_confidence_threshold: 0.5,
        }
    }
}

impl SchemaModel for ObjectDetection {
    const NAME: &'static str = "ObjectDetection";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::choice("cnn_network", CnnNetwork::ALL),
        FieldDescriptor::integer("min_object_size").min(0.0),
        FieldDescriptor::float("cnn_confidence_threshold")
            .min(0.0)
            .max(1.0),
    ];
}

/// Tracker configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Tracker {
    /// Detections needed before a track is counted
    #[schemars(range(min = 0))]
    #[schemars(extend("updatable" = true))]
    pub count_min_seen: u32,

    /// Missed frames after which a track is dropped
    #[schemars(range(min = 0))]
    #[schemars(extend("updatable" = true))]
    pub count_max_unseen: u32,
}

impl Default for Tracker {
    fn default() -> Self {
        Self {
            count_min_seen: 10,
            count_max_unseen: 20,
        }
    }
}

impl SchemaModel for Tracker {
    const NAME: &'static str = "Tracker";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::integer("count_min_seen").min(0.0),
        FieldDescriptor::integer("count_max_unseen").min(0.0),
    ];
}

/// Main application settings model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppSettings {
    pub object_detection: ObjectDetection,
    pub tracker: Tracker,
}

impl SchemaModel for AppSettings {
    const NAME: &'static str = "AppSettings";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::group("object_detection", ObjectDetection::FIELDS),
        FieldDescriptor::group("tracker", Tracker::FIELDS),
    ];
}

impl Settings for AppSettings {}

impl fmt::Display for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        settings_core::display_settings(self, f)
    }
}
