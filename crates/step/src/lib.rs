//! Single-interval kinematics: velocity, distance and fuel after one step of
//! constant acceleration.

mod error;
pub mod fuel;
pub mod motion;
pub mod step;

pub use error::UpdateError;
pub use fuel::{FuelBurn, FuelStatus, burn_fuel, remaining_fuel};
pub use motion::{average_velocity, new_distance, new_velocity};
pub use step::{StepError, StepInputs, StepReport, run_step};
