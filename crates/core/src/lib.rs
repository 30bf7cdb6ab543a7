//! Core units, constants, and shared primitives for the kinematics calculator workspace.

pub mod quantity;
pub mod validate;

pub use quantity::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, Meters, MetersPerSecond,
    MetersPerSecondSquared, Seconds,
};
pub use validate::{InputErrorKind, InvalidInputError, check_finite, parse_operand, validate_inputs};

/// Conversion factors between display units and SI.
pub mod constants {
    /// Metres per kilometre.
    pub const METERS_PER_KM: f64 = 1_000.0;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Exact km/h → m/s factor (1000/3600 = 5/18).
    pub const KMH_TO_MS: f64 = METERS_PER_KM / SECONDS_PER_HOUR;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{KMH_TO_MS, METERS_PER_KM};

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * METERS_PER_KM
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / METERS_PER_KM
    }

    /// Convert kilometres per hour to metres per second.
    #[inline]
    pub fn kmh_to_ms(v: f64) -> f64 {
        v * KMH_TO_MS
    }

    /// Convert metres per second to kilometres per hour.
    #[inline]
    pub fn ms_to_kmh(v: f64) -> f64 {
        v / KMH_TO_MS
    }
}
