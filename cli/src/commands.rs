use clap::{ArgMatches, Command};

pub fn cli() -> Vec<Command> {
    vec![
        completions::cli(),
        info::cli(),
        list::cli(),
        point::cli(),
        report::cli(),
    ]
}

pub fn dispatch(matches: ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("completions", args)) => completions::exec(args),
        Some(("info", args)) => info::exec(args),
        Some(("list", args)) => list::exec(args),
        Some(("point", args)) => point::exec(args),
        Some(("report", args)) => report::exec(args),
        _ => unreachable!(),
    }
}

pub mod completions;
pub mod info;
pub mod list;
pub mod point;
pub mod report;
