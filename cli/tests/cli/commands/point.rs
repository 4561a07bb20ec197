use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::{CMD_NAME, utils};

crate::commands::test_simple_display! {
    (
        point_with_default_location_and_variables,
        "point",
        utils::testdata::surface_report_file()?,
        Vec::<&str>::new(),
        "\
Temperature_height_above_ground 260 K
Dewpoint_temperature_height_above_ground 250 K
Visibility_surface 20010 m
Total_cloud_cover_entire_atmosphere 60 %
MSLP_MAPS_System_Reduction_msl 60010 Pa
"
    ),
    (
        point_with_location,
        "point",
        utils::testdata::surface_report_file()?,
        vec!["--lat", "42.9", "--lon", "-79.9", "-v", "Visibility_surface"],
        "\
Visibility_surface 20000 m
"
    ),
    (
        point_with_longitude_in_0_to_360,
        "point",
        utils::testdata::surface_report_file()?,
        vec!["--lon", "282.15", "-v", "Temperature_height_above_ground"],
        "\
Temperature_height_above_ground 260 K
"
    ),
    (
        point_with_multiple_variables,
        "point",
        utils::testdata::surface_report_file()?,
        vec![
            "-v",
            "MSLP_MAPS_System_Reduction_msl",
            "--variable",
            "Temperature_height_above_ground",
        ],
        "\
MSLP_MAPS_System_Reduction_msl 60010 Pa
Temperature_height_above_ground 260 K
"
    ),
}

#[test]
fn point_with_unknown_variable() -> Result<(), Box<dyn std::error::Error>> {
    let input = utils::testdata::surface_report_file()?;
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("point")
        .args(["-v", "Temperature_surface", "-v", "Visibility_surface"])
        .arg(input.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::diff(
            "\
Temperature_surface -
Visibility_surface 20010 m
",
        ))
        .stderr(
            predicate::str::contains("WARN")
                .and(predicate::str::contains("no such variable: Temperature_surface")),
        );

    Ok(())
}

#[test]
fn point_outside_coverage() -> Result<(), Box<dyn std::error::Error>> {
    let input = utils::testdata::surface_report_file()?;
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("point")
        .args(["--lat", "-33.9", "--lon", "151.2", "-v", "Visibility_surface"])
        .arg(input.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("Visibility_surface -\n"))
        .stderr(predicate::str::contains("outside the grid coverage"));

    Ok(())
}

#[test]
fn point_with_warnings_silenced() -> Result<(), Box<dyn std::error::Error>> {
    let input = utils::testdata::surface_report_file()?;
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.env("RUST_LOG", "off")
        .arg("point")
        .args(["-v", "Temperature_surface"])
        .arg(input.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("Temperature_surface -\n"))
        .stderr(predicate::str::is_empty());

    Ok(())
}
