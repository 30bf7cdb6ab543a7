//! Single-step kinematics calculator.
//!
//! The member crates are re-exported here so front-ends (the `kinematics`
//! binary, tests) depend on one library. Scenario resolution, which joins
//! the config crate with the step inputs, lives in [`scenario`].

pub mod scenario;

pub use kinematics_config as config;
pub use kinematics_core as primitives;
pub use kinematics_export as export;
pub use kinematics_step as step;

pub use kinematics_core::{InputErrorKind, InvalidInputError};
pub use kinematics_step::{StepError, StepInputs, StepReport, UpdateError, run_step};
