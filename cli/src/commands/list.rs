use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

use clap::{ArgMatches, Command};
use grib_point::VariableDescriptor;

use crate::cli;

pub fn cli() -> Command {
    Command::new(crate::cli::module_component!())
        .about("List variables contained in the data")
        .arg(cli::file_arg())
}

pub fn exec(args: &ArgMatches) -> anyhow::Result<()> {
    let file_name = args
        .get_one::<PathBuf>("FILE")
        .ok_or_else(|| anyhow::anyhow!("no file specified"))?;
    let dataset = cli::dataset(file_name)?;
    cli::display_in_pager(ListView(dataset.variables()));
    dataset.close();

    Ok(())
}

pub(crate) struct ListView<'i>(pub(crate) &'i [VariableDescriptor]);

impl cli::PredictableNumLines for ListView<'_> {
    fn num_lines(&self) -> usize {
        let Self(inner) = self;
        inner.len()
    }
}

impl Display for ListView<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self(inner) = self;
        for var in inner.iter() {
            writeln!(f, "{var}")?;
        }
        Ok(())
    }
}
