use clap::{Command, crate_name, crate_version};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn app() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about("Extract values at a point from GRIB2 data")
        .arg_required_else_help(true)
        .subcommands(commands::cli())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(console::user_attended_stderr())
        .init();
}

fn real_main() -> anyhow::Result<()> {
    let matches = app().get_matches();
    init_logging();

    commands::dispatch(matches)
}

fn main() {
    if let Err(ref e) = real_main() {
        let red = console::Style::new().red();
        eprintln!("{}: {}", red.apply_to("error"), e);
        std::process::exit(1);
    }
}
