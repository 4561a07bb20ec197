use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::{CMD_NAME, utils};

macro_rules! test_subcommands_without_args {
    ($(($name:ident, $str:expr),)*) => ($(
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            let mut cmd = Command::cargo_bin(CMD_NAME)?;
            cmd.arg($str);
            cmd.assert()
                .failure()
                .stdout(predicate::str::is_empty())
                .stderr(
                    predicate::str::starts_with(
                        "error: the following required arguments were not provided:",
                    )
                        .and(predicate::str::contains("Usage:"))
                        .and(predicate::str::contains("Commands:").not()),
                );

            Ok(())
        }
    )*);
}

test_subcommands_without_args! {
    (completions_without_args, "completions"),
    (info_without_args, "info"),
    (list_without_args, "list"),
    (point_without_args, "point"),
    (report_without_args, "report"),
}

macro_rules! test_subcommands_with_nonexisting_file {
    ($(($name:ident, $command:expr),)*) => ($(
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            let dir = TempDir::new()?;
            let file_path = dir.path().join("nosuchfile");
            let file_path = format!("{}", file_path.display());

            let mut cmd = Command::cargo_bin(CMD_NAME)?;
            cmd.arg($command).arg(&file_path);
            cmd.assert()
                .failure()
                .stdout(predicate::str::is_empty())
                .stderr(predicate::str::starts_with(format!(
                    "error: cannot open {file_path}: "
                )));

            Ok(())
        }
    )*);
}

test_subcommands_with_nonexisting_file! {
    (info_with_nonexisting_file, "info"),
    (list_with_nonexisting_file, "list"),
    (point_with_nonexisting_file, "point"),
    (report_with_nonexisting_file, "report"),
}

macro_rules! test_subcommands_with_wrong_input_files {
    ($(($name:ident, $command:expr, $input:expr, $stderr:expr),)*) => ($(
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            let input = $input;

            let mut cmd = Command::cargo_bin(CMD_NAME)?;
            cmd.arg($command).arg(input.path());
            cmd.assert()
                .failure()
                .stdout(predicate::str::is_empty())
                .stderr($stderr);

            Ok(())
        }
    )*);
}

test_subcommands_with_wrong_input_files! {
    (
        info_with_non_grib,
        "info",
        utils::testdata::non_grib_file()?,
        predicate::str::diff("error: Not GRIB data\n")
    ),
    (
        list_with_non_grib,
        "list",
        utils::testdata::non_grib_file()?,
        predicate::str::diff("error: Not GRIB data\n")
    ),
    (
        point_with_non_grib,
        "point",
        utils::testdata::non_grib_file()?,
        predicate::str::diff("error: Not GRIB data\n")
    ),
    (
        report_with_non_grib,
        "report",
        utils::testdata::non_grib_file()?,
        predicate::str::diff("error: Not GRIB data\n")
    ),
    (
        info_with_empty_file,
        "info",
        utils::testdata::empty_file()?,
        predicate::str::diff("error: empty GRIB2 data\n")
    ),
    (
        point_with_empty_file,
        "point",
        utils::testdata::empty_file()?,
        predicate::str::diff("error: empty GRIB2 data\n")
    ),
    (
        report_with_empty_file,
        "report",
        utils::testdata::empty_file()?,
        predicate::str::diff("error: empty GRIB2 data\n")
    ),
    (
        info_with_too_small_file,
        "info",
        utils::testdata::too_small_file()?,
        predicate::str::diff("error: Not GRIB data\n")
    ),
    (
        report_with_too_small_file,
        "report",
        utils::testdata::too_small_file()?,
        predicate::str::diff("error: Not GRIB data\n")
    ),
}

#[test]
fn reading_from_stdin_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(CMD_NAME)?;
    cmd.arg("report").arg("-");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::diff(
            "error: reading from standard input is not supported; specify a file\n",
        ));

    Ok(())
}
