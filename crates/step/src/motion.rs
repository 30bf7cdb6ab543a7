//! Velocity and distance updates under constant acceleration.

use kinematics_core::{
    Kilometers, Meters, MetersPerSecond, MetersPerSecondSquared, Seconds, validate_inputs,
};
use tracing::debug;

use crate::error::{UpdateError, finite_result};

/// `v = v0 + a·t`. Negative or very large results are valid; overflow is not.
pub fn new_velocity(
    initial: MetersPerSecond,
    acceleration: MetersPerSecondSquared,
    elapsed: Seconds,
) -> Result<MetersPerSecond, UpdateError> {
    validate_inputs(&[
        ("initial_velocity", initial.value()),
        ("acceleration", acceleration.value()),
        ("elapsed_time", elapsed.value()),
    ])?;
    let velocity = finite_result(
        "new_velocity",
        initial.value() + acceleration.value() * elapsed.value(),
    )?;
    debug!(
        initial_m_s = initial.value(),
        acceleration_m_s2 = acceleration.value(),
        elapsed_s = elapsed.value(),
        velocity_m_s = velocity,
        "velocity update"
    );
    Ok(MetersPerSecond::new(velocity))
}

/// Mean of the interval's end-point velocities; exact for constant acceleration.
pub fn average_velocity(
    initial: MetersPerSecond,
    final_velocity: MetersPerSecond,
) -> Result<MetersPerSecond, UpdateError> {
    validate_inputs(&[
        ("initial_velocity", initial.value()),
        ("final_velocity", final_velocity.value()),
    ])?;
    // Halve first so two finite operands cannot overflow the sum.
    Ok(MetersPerSecond::new(
        initial.value() / 2.0 + final_velocity.value() / 2.0,
    ))
}

/// `d = d0 + v̄·t`, with `v̄·t` in metres folded into the kilometre total.
pub fn new_distance(
    initial: Kilometers,
    average_velocity: MetersPerSecond,
    elapsed: Seconds,
) -> Result<Kilometers, UpdateError> {
    validate_inputs(&[
        ("initial_distance", initial.value()),
        ("velocity", average_velocity.value()),
        ("elapsed_time", elapsed.value()),
    ])?;
    let travelled_m = finite_result(
        "distance_travelled",
        average_velocity.value() * elapsed.value(),
    )?;
    let travelled = Meters::new(travelled_m).to_kilometers();
    let distance = finite_result("new_distance", initial.value() + travelled.value())?;
    debug!(
        initial_km = initial.value(),
        average_velocity_m_s = average_velocity.value(),
        elapsed_s = elapsed.value(),
        distance_km = distance,
        "distance update"
    );
    Ok(Kilometers::new(distance))
}
