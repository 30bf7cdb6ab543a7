use std::path::Path;

use kinematics_config::{ConfigError, ScenarioConfig, load_scenario};
use kinematics_core::{
    InvalidInputError, Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour,
    MetersPerSecondSquared, Seconds, parse_operand,
};
use kinematics_step::StepInputs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid scenario: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Per-field text overrides, e.g. from the command line. Positions in errors
/// follow [`ScenarioConfig::FIELDS`].
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub initial_velocity_kmh: Option<String>,
    pub acceleration_m_s2: Option<String>,
    pub elapsed_s: Option<String>,
    pub initial_distance_km: Option<String>,
    pub initial_fuel_kg: Option<String>,
    pub burn_rate_kg_s: Option<String>,
}

impl Overrides {
    fn fields(&self) -> [Option<&str>; 6] {
        [
            self.initial_velocity_kmh.as_deref(),
            self.acceleration_m_s2.as_deref(),
            self.elapsed_s.as_deref(),
            self.initial_distance_km.as_deref(),
            self.initial_fuel_kg.as_deref(),
            self.burn_rate_kg_s.as_deref(),
        ]
    }
}

/// Merge built-in defaults, scenario fields and overrides (highest precedence),
/// validating every supplied value.
pub fn resolve_inputs(
    config: &ScenarioConfig,
    overrides: &Overrides,
) -> Result<StepInputs, InvalidInputError> {
    let defaults = StepInputs::default();
    let mut values = [
        defaults.initial_velocity.value(),
        defaults.acceleration.value(),
        defaults.elapsed.value(),
        defaults.initial_distance.value(),
        defaults.initial_fuel.value(),
        defaults.burn_rate.value(),
    ];

    for (idx, ((name, field), raw)) in config
        .fields()
        .into_iter()
        .zip(overrides.fields())
        .enumerate()
    {
        let position = idx + 1;
        if let Some(raw) = raw {
            values[idx] = parse_operand(position, name, Some(raw))?;
        } else if let Some(field) = field {
            values[idx] = field.resolve(position, name)?;
        }
    }

    let [velocity, acceleration, elapsed, distance, fuel, burn_rate] = values;
    Ok(StepInputs {
        initial_velocity: KilometersPerHour::new(velocity),
        acceleration: MetersPerSecondSquared::new(acceleration),
        elapsed: Seconds::new(elapsed),
        initial_distance: Kilometers::new(distance),
        initial_fuel: Kilograms::new(fuel),
        burn_rate: KilogramsPerSecond::new(burn_rate),
    })
}

/// Load the optional scenario file and apply overrides on top.
pub fn load_inputs(
    path: Option<&Path>,
    overrides: &Overrides,
) -> Result<StepInputs, ScenarioError> {
    let config = match path {
        Some(path) => load_scenario(path)?,
        None => ScenarioConfig::default(),
    };
    Ok(resolve_inputs(&config, overrides)?)
}
