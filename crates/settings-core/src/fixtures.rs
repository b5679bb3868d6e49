//! Small settings model shared by the unit tests

use crate::field::FieldDescriptor;
use crate::model::{SchemaModel, Settings};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaptureMode {
    #[default]
    Auto,
    Manual,
}

/// Camera capture parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Camera {
    #[schemars(range(min = 0, max = 1000))]
    #[schemars(extend("updatable" = true))]
    pub exposure: u32,
    #[schemars(range(min = 0.0, max = 1.0))]
    #[schemars(extend("updatable" = true))]
    pub gain: f64,
    #[schemars(extend("updatable" = true))]
    pub mode: CaptureMode,
    #[schemars(extend("updatable" = false))]
    pub serial: String,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            exposure: 100,
            gain: 0.5,
            mode: CaptureMode::Auto,
            serial: "CAM-0001".to_string(),
        }
    }
}

impl SchemaModel for Camera {
    const NAME: &'static str = "Camera";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::integer("exposure").min(0.0).max(1000.0),
        FieldDescriptor::float("gain").min(0.0).max(1.0),
        FieldDescriptor::choice("mode", &["AUTO", "MANUAL"]),
        FieldDescriptor::string("serial").protected(),
    ];
}

/// Uplink parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Network {
    #[schemars(extend("updatable" = false))]
    pub host: String,
    #[schemars(range(min = 0, max = 65535))]
    #[schemars(extend("updatable" = false))]
    pub port: u16,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl SchemaModel for Network {
    const NAME: &'static str = "Network";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::string("host").protected(),
        FieldDescriptor::integer("port").min(0.0).max(65535.0).protected(),
    ];
}

/// Test rig settings root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Rig {
    pub camera: Camera,
    pub network: Network,
    pub tags: Vec<String>,
}

impl Default for Rig {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            network: Network::default(),
            tags: vec!["day".to_string()],
        }
    }
}

impl SchemaModel for Rig {
    const NAME: &'static str = "Rig";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::group("camera", Camera::FIELDS),
        FieldDescriptor::group("network", Network::FIELDS),
        FieldDescriptor::list("tags"),
    ];
}

impl Settings for Rig {}

impl fmt::Display for Rig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::model::display_settings(self, f)
    }
}
