//! Scenario file models and loaders for the kinematics calculator.

use std::fs::File;
use std::path::Path;

use kinematics_core::{InputErrorKind, InvalidInputError, check_finite};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A scalar as written in a scenario file, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarField {
    Number(f64),
    Text(String),
    Null,
    /// Booleans, lists, tables: anything else a manifest can hold.
    Other(IgnoredAny),
}

impl ScalarField {
    /// Accept finite numbers only. Text, null and every other value are
    /// non-numeric, even when the text would parse.
    pub fn resolve(&self, position: usize, name: &'static str) -> Result<f64, InvalidInputError> {
        match self {
            ScalarField::Number(value) => check_finite(position, name, *value),
            ScalarField::Text(_) | ScalarField::Null | ScalarField::Other(_) => {
                Err(InvalidInputError {
                    kind: InputErrorKind::NonNumeric,
                    position,
                    name,
                })
            }
        }
    }
}

/// Step inputs parsed from a scenario manifest. Absent fields fall back to the
/// built-in scenario.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default, deserialize_with = "present")]
    pub initial_velocity_kmh: Option<ScalarField>,
    #[serde(default, deserialize_with = "present")]
    pub acceleration_m_s2: Option<ScalarField>,
    #[serde(default, deserialize_with = "present")]
    pub elapsed_s: Option<ScalarField>,
    #[serde(default, deserialize_with = "present")]
    pub initial_distance_km: Option<ScalarField>,
    #[serde(default, deserialize_with = "present")]
    pub initial_fuel_kg: Option<ScalarField>,
    #[serde(default, deserialize_with = "present")]
    pub burn_rate_kg_s: Option<ScalarField>,
}

impl ScenarioConfig {
    /// Field names in manifest order; positions in validation errors index this list from 1.
    pub const FIELDS: [&'static str; 6] = [
        "initial_velocity_kmh",
        "acceleration_m_s2",
        "elapsed_s",
        "initial_distance_km",
        "initial_fuel_kg",
        "burn_rate_kg_s",
    ];

    /// Fields paired with their names, in manifest order.
    pub fn fields(&self) -> [(&'static str, Option<&ScalarField>); 6] {
        [
            (Self::FIELDS[0], self.initial_velocity_kmh.as_ref()),
            (Self::FIELDS[1], self.acceleration_m_s2.as_ref()),
            (Self::FIELDS[2], self.elapsed_s.as_ref()),
            (Self::FIELDS[3], self.initial_distance_km.as_ref()),
            (Self::FIELDS[4], self.initial_fuel_kg.as_ref()),
            (Self::FIELDS[5], self.burn_rate_kg_s.as_ref()),
        ]
    }
}

// An explicit `null` must survive as `Some(ScalarField::Null)` instead of
// collapsing into an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<ScalarField>, D::Error>
where
    D: Deserializer<'de>,
{
    ScalarField::deserialize(deserializer).map(Some)
}

/// Errors that can occur while loading scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a scenario from a `.toml` file, or YAML for any other extension.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
