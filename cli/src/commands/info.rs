use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

use clap::{ArgMatches, Command};
use grib_point::Grib2Dataset;

use crate::cli;

pub fn cli() -> Command {
    Command::new(crate::cli::module_component!())
        .about("Show a summary of the data")
        .arg(cli::file_arg())
}

pub fn exec(args: &ArgMatches) -> anyhow::Result<()> {
    let file_name = args
        .get_one::<PathBuf>("FILE")
        .ok_or_else(|| anyhow::anyhow!("no file specified"))?;
    let dataset = cli::dataset(file_name)?;
    print!("{}", InfoView(&dataset));
    dataset.close();

    Ok(())
}

struct InfoView<'i>(&'i Grib2Dataset);

impl Display for InfoView<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self(dataset) = self;
        let range = dataset
            .time_range()
            .map(|range| range.to_string())
            .unwrap_or_else(|| "-".to_owned());
        write!(
            f,
            "\
Path:          {}
Submessages:   {}
Variables:     {}
Date Range {}
",
            dataset.path().display(),
            dataset.len(),
            dataset.variables().len(),
            range,
        )
    }
}
