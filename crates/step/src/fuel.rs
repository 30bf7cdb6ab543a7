//! Propellant consumption over one interval.

use kinematics_core::{Kilograms, KilogramsPerSecond, Seconds, validate_inputs};
use serde::Serialize;
use tracing::debug;

use crate::error::{UpdateError, finite_result};

/// Whether the tank lasted the whole interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FuelStatus {
    /// Fuel remained (or the rate was zero) for the full interval.
    Sufficient,
    /// The tank ran dry `after` seconds into the interval.
    Exhausted { after: Seconds },
}

/// Outcome of burning fuel at a constant rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelBurn {
    pub remaining: Kilograms,
    pub consumed: Kilograms,
    pub status: FuelStatus,
}

impl FuelBurn {
    pub fn is_exhausted(&self) -> bool {
        matches!(self.status, FuelStatus::Exhausted { .. })
    }
}

/// `max(0, f0 - r·t)`.
pub fn remaining_fuel(
    initial: Kilograms,
    burn_rate: KilogramsPerSecond,
    elapsed: Seconds,
) -> Result<Kilograms, UpdateError> {
    burn_fuel(initial, burn_rate, elapsed).map(|burn| burn.remaining)
}

/// Burn fuel for `elapsed` seconds, clamping at an empty tank and reporting
/// when that happened.
pub fn burn_fuel(
    initial: Kilograms,
    burn_rate: KilogramsPerSecond,
    elapsed: Seconds,
) -> Result<FuelBurn, UpdateError> {
    validate_inputs(&[
        ("initial_fuel", initial.value()),
        ("burn_rate", burn_rate.value()),
        ("elapsed_time", elapsed.value()),
    ])?;

    let unclamped = initial.value() - burn_rate.value() * elapsed.value();
    let burn = if unclamped < 0.0 {
        let after = if burn_rate.value() > 0.0 {
            (initial.value() / burn_rate.value()).max(0.0)
        } else {
            0.0
        };
        FuelBurn {
            remaining: Kilograms::new(0.0),
            consumed: Kilograms::new(initial.value().max(0.0)),
            status: FuelStatus::Exhausted {
                after: Seconds::new(after),
            },
        }
    } else {
        // `+ 0.0` turns a -0.0 tank into 0.0.
        let remaining = finite_result("remaining_fuel", unclamped)? + 0.0;
        FuelBurn {
            remaining: Kilograms::new(remaining),
            consumed: Kilograms::new(finite_result(
                "fuel_consumed",
                initial.value() - remaining,
            )?),
            status: FuelStatus::Sufficient,
        }
    };

    debug!(
        initial_kg = initial.value(),
        burn_rate_kg_s = burn_rate.value(),
        elapsed_s = elapsed.value(),
        remaining_kg = burn.remaining.value(),
        exhausted = burn.is_exhausted(),
        "fuel update"
    );
    Ok(burn)
}
