use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

use clap::{ArgMatches, Command};
use grib_point::{TimeRange, VariableDescriptor, format_time, grid_value};

use crate::{cli, commands::list::ListView};

pub fn cli() -> Command {
    Command::new(crate::cli::module_component!())
        .about("Show the date range, the variables and a surface weather report at a location")
        .args(cli::location_args())
        .arg(cli::file_arg())
}

pub fn exec(args: &ArgMatches) -> anyhow::Result<()> {
    let file_name = args
        .get_one::<PathBuf>("FILE")
        .ok_or_else(|| anyhow::anyhow!("no file specified"))?;
    let (lat, lon) = cli::location(args);

    let dataset = cli::dataset(file_name)?;
    let [temperature, dewpoint, visibility, cloud_cover, mslp] =
        cli::REPORT_VARIABLES.map(|name| grid_value(&dataset, lat, lon, name));
    let view = ReportView {
        time_range: dataset.time_range(),
        variables: dataset.variables(),
        lat,
        lon,
        values: SurfaceValues {
            temperature,
            dewpoint,
            cloud_cover,
            visibility,
            mslp,
        },
    };
    print!("{view}");
    dataset.close();

    Ok(())
}

struct SurfaceValues {
    temperature: Option<f64>,
    dewpoint: Option<f64>,
    cloud_cover: Option<f64>,
    visibility: Option<f64>,
    mslp: Option<f64>,
}

struct ReportView<'i> {
    time_range: Option<TimeRange>,
    variables: &'i [VariableDescriptor],
    lat: f64,
    lon: f64,
    values: SurfaceValues,
}

impl Display for ReportView<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.time_range {
            Some(range) => writeln!(f, "Date Range {range}")?,
            None => writeln!(f, "Date Range -")?,
        }
        write!(f, "{}", ListView(self.variables))?;

        let start = self
            .time_range
            .map(|range| format_time(&range.start))
            .unwrap_or_else(|| "-".to_owned());
        let values = &self.values;
        writeln!(
            f,
            "Value at {:.6} {:.6} {} {} {} {} {} {}",
            self.lat,
            self.lon,
            start,
            Formatted(values.temperature, 5, 2),
            Formatted(values.dewpoint, 5, 2),
            Formatted(values.cloud_cover, 4, 1),
            Formatted(values.visibility, 5, 0),
            Formatted(values.mslp, 5, 0),
        )
    }
}

/// A value printed with a width and a precision, or `-` in the same width
/// when absent.
struct Formatted(Option<f64>, usize, usize);

impl Display for Formatted {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self(value, width, precision) = *self;
        match value {
            Some(value) => write!(f, "{value:width$.precision$}"),
            None => write!(f, "{:>width$}", "-"),
        }
    }
}
