//! Orchestrates one interval: unit conversion in, the three updates, conversion out.

use kinematics_core::{
    InvalidInputError, Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour,
    MetersPerSecond, MetersPerSecondSquared, Seconds,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::error::{UpdateError, finite_result};
use crate::fuel::{FuelBurn, FuelStatus, burn_fuel};
use crate::motion::{average_velocity, new_distance, new_velocity};

/// Inputs for a single step, in the units an operator reads them in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepInputs {
    pub initial_velocity: KilometersPerHour,
    pub acceleration: MetersPerSecondSquared,
    pub elapsed: Seconds,
    pub initial_distance: Kilometers,
    pub initial_fuel: Kilograms,
    pub burn_rate: KilogramsPerSecond,
}

impl Default for StepInputs {
    /// One hour at 3 m/s² from 10 000 km/h, 5 000 kg of fuel burned at 0.5 kg/s.
    fn default() -> Self {
        Self {
            initial_velocity: KilometersPerHour::new(10_000.0),
            acceleration: MetersPerSecondSquared::new(3.0),
            elapsed: Seconds::new(3_600.0),
            initial_distance: Kilometers::new(0.0),
            initial_fuel: Kilograms::new(5_000.0),
            burn_rate: KilogramsPerSecond::new(0.5),
        }
    }
}

/// Derived state after the step. Display values plus the SI intermediates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepReport {
    pub new_velocity: KilometersPerHour,
    pub new_distance: Kilometers,
    pub remaining_fuel: Kilograms,
    pub initial_velocity_si: MetersPerSecond,
    pub new_velocity_si: MetersPerSecond,
    pub average_velocity_si: MetersPerSecond,
    pub fuel: FuelBurn,
}

/// Top-level step error, tagged with the update that failed.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("velocity update failed: {0}")]
    Velocity(#[source] UpdateError),
    #[error("distance update failed: {0}")]
    Distance(#[source] UpdateError),
    #[error("fuel update failed: {0}")]
    Fuel(#[source] UpdateError),
}

impl StepError {
    pub fn update_error(&self) -> &UpdateError {
        match self {
            StepError::Velocity(err) | StepError::Distance(err) | StepError::Fuel(err) => err,
        }
    }

    /// The rejected operand, if the failure was a validation error.
    pub fn input_error(&self) -> Option<&InvalidInputError> {
        self.update_error().input_error()
    }
}

/// Run the velocity → average velocity → distance chain and the fuel update.
///
/// This is the only place that crosses between km/h and m/s. Fuel exhaustion
/// clamps the tank at zero and is logged, but velocity and distance still
/// assume acceleration held for the whole interval.
pub fn run_step(inputs: &StepInputs) -> Result<StepReport, StepError> {
    let initial_si = inputs.initial_velocity.to_meters_per_second();

    let final_si =
        new_velocity(initial_si, inputs.acceleration, inputs.elapsed).map_err(StepError::Velocity)?;
    let final_kmh = finite_result("new_velocity_kmh", final_si.to_kilometers_per_hour().value())
        .map_err(StepError::Velocity)?;
    let average_si = average_velocity(initial_si, final_si).map_err(StepError::Distance)?;
    let distance = new_distance(inputs.initial_distance, average_si, inputs.elapsed)
        .map_err(StepError::Distance)?;
    let fuel = burn_fuel(inputs.initial_fuel, inputs.burn_rate, inputs.elapsed)
        .map_err(StepError::Fuel)?;

    if let FuelStatus::Exhausted { after } = fuel.status {
        warn!(
            exhausted_after_s = after.value(),
            elapsed_s = inputs.elapsed.value(),
            "fuel exhausted before the end of the interval; velocity and distance assume thrust for the full interval"
        );
    }

    Ok(StepReport {
        new_velocity: KilometersPerHour::new(final_kmh),
        new_distance: distance,
        remaining_fuel: fuel.remaining,
        initial_velocity_si: initial_si,
        new_velocity_si: final_si,
        average_velocity_si: average_si,
        fuel,
    })
}
