use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn default_run_prints_three_corrected_lines() {
    Command::cargo_bin("kinematics")
        .expect("kinematics bin")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(
            "Corrected New Velocity: 48880.00 km/h\n\
             Corrected New Distance: 29440.00 km\n\
             Corrected Remaining Fuel: 3200.00 kg\n",
        );
}

#[test]
fn overrides_accept_negative_values() {
    Command::cargo_bin("kinematics")
        .expect("kinematics bin")
        .args([
            "--initial-velocity-kmh",
            "36",
            "--acceleration",
            "-2",
            "--elapsed",
            "10",
            "--initial-fuel-kg",
            "1",
            "--burn-rate",
            "0",
        ])
        .assert()
        .success()
        .stdout(
            "Corrected New Velocity: -36.00 km/h\n\
             Corrected New Distance: 0.00 km\n\
             Corrected Remaining Fuel: 1.00 kg\n",
        );
}

#[test]
fn invalid_override_fails_without_output() {
    Command::cargo_bin("kinematics")
        .expect("kinematics bin")
        .args(["--burn-rate", "NaN"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("(`burn_rate_kg_s`) is non-finite"));

    Command::cargo_bin("kinematics")
        .expect("kinematics bin")
        .args(["--elapsed", "one hour"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("argument 3 (`elapsed_s`) is non-numeric"));
}

#[test]
fn overflowing_step_fails_without_output() {
    Command::cargo_bin("kinematics")
        .expect("kinematics bin")
        .args([
            "--initial-velocity-kmh",
            "1e300",
            "--acceleration",
            "0",
            "--elapsed",
            "1e20",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "`distance_travelled` overflowed to a non-finite value",
        ));
}

#[test]
fn fuel_exhaustion_warns_on_stderr_only() {
    Command::cargo_bin("kinematics")
        .expect("kinematics bin")
        .env_remove("RUST_LOG")
        .args(["--initial-fuel-kg", "900"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Corrected Remaining Fuel: 0.00 kg"))
        .stderr(predicate::str::contains("fuel exhausted"));
}

#[test]
fn json_report_written_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let scenario = dir.path().join("scenario.yaml");
    fs::write(&scenario, "initial_fuel_kg: 1000\n").expect("write scenario");
    let output = dir.path().join("out/report.json");

    Command::cargo_bin("kinematics")
        .expect("kinematics bin")
        .args([
            "--scenario",
            scenario.to_str().unwrap(),
            "--format",
            "json",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = fs::read_to_string(&output).expect("json output");
    let json: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
    assert_eq!(json["inputs"]["initial_fuel"], 1000.0);
    assert_eq!(json["report"]["remaining_fuel"], 0.0);
    assert_eq!(json["report"]["fuel"]["status"]["state"], "exhausted");
    assert_eq!(json["report"]["fuel"]["status"]["after"], 2000.0);
    let distance = json["report"]["new_distance"].as_f64().expect("number");
    assert!((distance - 29_440.0).abs() < 1e-6);
}
