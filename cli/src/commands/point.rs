use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

use clap::{ArgAction, ArgMatches, Command, arg};
use grib_point::{Grib2Dataset, grid_value};

use crate::cli;

pub fn cli() -> Command {
    Command::new(crate::cli::module_component!())
        .about("Show values of variables at the grid point nearest to a location")
        .args(cli::location_args())
        .arg(
            arg!(-v --variable <NAME> "Variable to look up (repeatable)")
                .action(ArgAction::Append)
                .default_values(cli::REPORT_VARIABLES),
        )
        .arg(cli::file_arg())
}

pub fn exec(args: &ArgMatches) -> anyhow::Result<()> {
    let file_name = args
        .get_one::<PathBuf>("FILE")
        .ok_or_else(|| anyhow::anyhow!("no file specified"))?;
    let (lat, lon) = cli::location(args);
    let names = args
        .get_many::<String>("variable")
        .map(|names| names.map(String::as_str).collect::<Vec<_>>())
        .unwrap_or_else(|| cli::REPORT_VARIABLES.to_vec());

    let dataset = cli::dataset(file_name)?;
    let rows = names
        .into_iter()
        .map(|name| PointRow::look_up(&dataset, lat, lon, name))
        .collect::<Vec<_>>();
    print!("{}", PointView(&rows));
    dataset.close();

    Ok(())
}

struct PointRow<'n> {
    name: &'n str,
    value: Option<f64>,
    units: String,
}

impl<'n> PointRow<'n> {
    fn look_up(dataset: &Grib2Dataset, lat: f64, lon: f64, name: &'n str) -> Self {
        let units = dataset
            .find_field(name)
            .map(|field| field.descriptor().units.clone())
            .unwrap_or_default();
        Self {
            name,
            value: grid_value(dataset, lat, lon, name),
            units,
        }
    }
}

struct PointView<'i, 'n>(&'i [PointRow<'n>]);

impl Display for PointView<'_, '_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self(rows) = self;
        for row in rows.iter() {
            match row.value {
                Some(value) => writeln!(f, "{} {} {}", row.name, value, row.units)?,
                None => writeln!(f, "{} -", row.name)?,
            }
        }
        Ok(())
    }
}
