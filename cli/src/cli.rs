use std::path::Path;

use clap::{Arg, ArgMatches, arg};
use grib_point::Grib2Dataset;
#[cfg(unix)]
use pager::Pager;
#[cfg(unix)]
use which::which;

pub(crate) const DEFAULT_LAT: f64 = 40.85;
pub(crate) const DEFAULT_LON: f64 = -77.85;

pub(crate) const REPORT_VARIABLES: [&str; 5] = [
    "Temperature_height_above_ground",
    "Dewpoint_temperature_height_above_ground",
    "Visibility_surface",
    "Total_cloud_cover_entire_atmosphere",
    "MSLP_MAPS_System_Reduction_msl",
];

pub fn dataset<P>(path: P) -> anyhow::Result<Grib2Dataset>
where
    P: AsRef<Path>,
{
    if is_dash(&path) {
        anyhow::bail!("reading from standard input is not supported; specify a file")
    }
    let dataset = Grib2Dataset::open(path)?;
    Ok(dataset)
}

pub(crate) fn file_arg() -> Arg {
    arg!(<FILE> "Target GRIB2 file").value_parser(clap::value_parser!(std::path::PathBuf))
}

pub(crate) fn location_args() -> [Arg; 2] {
    [
        arg!(--lat <LAT> "Latitude of the point in degrees")
            .value_parser(clap::value_parser!(f64))
            .allow_negative_numbers(true)
            .default_value("40.85"),
        arg!(--lon <LON> "Longitude of the point in degrees")
            .value_parser(clap::value_parser!(f64))
            .allow_negative_numbers(true)
            .default_value("-77.85"),
    ]
}

pub(crate) fn location(args: &ArgMatches) -> (f64, f64) {
    let lat = args.get_one::<f64>("lat").copied().unwrap_or(DEFAULT_LAT);
    let lon = args.get_one::<f64>("lon").copied().unwrap_or(DEFAULT_LON);
    (lat, lon)
}

pub(crate) fn display_in_pager<V>(view: V)
where
    V: PredictableNumLines + std::fmt::Display,
{
    let user_attended = console::user_attended();

    let term = console::Term::stdout();
    let (height, _width) = term.size();
    if view.num_lines() > height.into() {
        start_pager();
    }

    if user_attended {
        console::set_colors_enabled(true);
    }

    print!("{view}");
}

pub(crate) trait PredictableNumLines {
    fn num_lines(&self) -> usize;
}

#[cfg(unix)]
fn start_pager() {
    if which("less").is_ok() {
        Pager::with_pager("less -R").setup();
    } else {
        Pager::new().setup();
    }
}

#[cfg(not(unix))]
fn start_pager() {}

fn is_dash<P: AsRef<Path>>(path: P) -> bool {
    matches!(path.as_ref().to_str(), Some("-"))
}

macro_rules! module_component {
    () => {
        module_path!().split("::").last().unwrap_or("")
    };
}
pub(crate) use module_component;
