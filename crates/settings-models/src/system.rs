//! System settings: operational parameters protected from write-back

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use settings_core::{FieldDescriptor, SchemaModel, Settings};
use std::fmt;

/// NMEA configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Nmea {
    #[schemars(extend("updatable" = false))]
    pub ip_address: String,

    #[schemars(range(min = 0, max = 65535))]
    #[schemars(extend("updatable" = false))]
    pub port: u16,
}

impl Default for Nmea {
    fn default() -> Self {
        Self {
            ip_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl SchemaModel for Nmea {
    const NAME: &'static str = "NMEA";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::string("ip_address").protected(),
        FieldDescriptor::integer("port")
            .min(0.0)
            .max(65535.0)
            .protected(),
    ];
}

/// System settings model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SystemSettings {
    pub nmea: Nmea,
}

impl SchemaModel for SystemSettings {
    const NAME: &'static str = "SystemSettings";
    const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor::group("nmea", Nmea::FIELDS)];
}

impl Settings for SystemSettings {}

impl fmt::Display for SystemSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        settings_core::display_settings(self, f)
    }
}
