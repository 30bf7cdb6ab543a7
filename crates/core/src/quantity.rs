//! Unit-tagged scalar quantities.
//!
//! Each wrapper carries exactly one physical unit. Formulas in the step crate
//! only accept the SI wrappers, so a km/h value has to pass through
//! [`KilometersPerHour::to_meters_per_second`] before it can be combined with
//! an acceleration or a duration.

use std::fmt;

use serde::Serialize;

use crate::units;

macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Unit symbol used when displaying the value.
            pub const SYMBOL: &'static str = $symbol;

            /// Wrap a raw magnitude. No validation happens here.
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Raw magnitude in this unit.
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*} {}", p, self.0, Self::SYMBOL),
                    None => write!(f, "{} {}", self.0, Self::SYMBOL),
                }
            }
        }
    };
}

quantity!(
    /// Speed in kilometres per hour (display unit).
    KilometersPerHour,
    "km/h"
);
quantity!(
    /// Speed in metres per second.
    MetersPerSecond,
    "m/s"
);
quantity!(
    /// Acceleration in metres per second squared.
    MetersPerSecondSquared,
    "m/s²"
);
quantity!(
    /// Duration in seconds.
    Seconds,
    "s"
);
quantity!(
    /// Length in metres.
    Meters,
    "m"
);
quantity!(
    /// Length in kilometres (display unit for distance).
    Kilometers,
    "km"
);
quantity!(
    /// Mass in kilograms.
    Kilograms,
    "kg"
);
quantity!(
    /// Mass flow in kilograms per second.
    KilogramsPerSecond,
    "kg/s"
);

impl KilometersPerHour {
    pub fn to_meters_per_second(self) -> MetersPerSecond {
        MetersPerSecond(units::kmh_to_ms(self.0))
    }
}

impl MetersPerSecond {
    pub fn to_kilometers_per_hour(self) -> KilometersPerHour {
        KilometersPerHour(units::ms_to_kmh(self.0))
    }
}

impl Meters {
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(units::m_to_km(self.0))
    }
}

impl Kilometers {
    pub fn to_meters(self) -> Meters {
        Meters(units::km_to_m(self.0))
    }
}
