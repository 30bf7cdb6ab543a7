use approx::assert_relative_eq;
use kinematics_calculator::primitives::constants::KMH_TO_MS;
use kinematics_calculator::primitives::units::{kmh_to_ms, m_to_km, ms_to_kmh};
use kinematics_calculator::primitives::{
    Kilograms, Kilometers, KilometersPerHour, Meters, MetersPerSecond,
};

#[test]
fn kmh_factor_is_five_eighteenths() {
    assert_relative_eq!(KMH_TO_MS, 5.0 / 18.0, epsilon = 1e-15);
    assert_relative_eq!(kmh_to_ms(36.0), 10.0, epsilon = 1e-12);
    assert_relative_eq!(ms_to_kmh(10.0), 36.0, epsilon = 1e-12);
}

#[test]
fn quantities_convert_through_the_unit_helpers() {
    let cruise = KilometersPerHour::new(10_000.0).to_meters_per_second();
    assert_relative_eq!(cruise.value(), 2_777.777_777_777_778, epsilon = 1e-9);
    assert_relative_eq!(
        MetersPerSecond::new(13_577.777_777_777_777)
            .to_kilometers_per_hour()
            .value(),
        48_880.0,
        epsilon = 1e-6
    );
    assert_eq!(Meters::new(29_440_000.0).to_kilometers().value(), 29_440.0);
    assert_eq!(Kilometers::new(1.5).to_meters().value(), 1_500.0);
    assert_eq!(m_to_km(250.0), 0.25);
}

#[test]
fn quantities_display_with_their_unit() {
    assert_eq!(format!("{:.2}", Kilograms::new(3_200.0)), "3200.00 kg");
    assert_eq!(format!("{}", KilometersPerHour::new(36.0)), "36 km/h");
}

#[test]
fn conversion_of_huge_speeds_stays_finite() {
    let fast = KilometersPerHour::new(1e306).to_meters_per_second();
    assert!(fast.value().is_finite());
    assert_relative_eq!(fast.value(), 1e306 * 5.0 / 18.0, max_relative = 1e-12);
    assert_relative_eq!(
        fast.to_kilometers_per_hour().value(),
        1e306,
        max_relative = 1e-12
    );
    assert!(kmh_to_ms(f64::MAX).is_finite());
}
