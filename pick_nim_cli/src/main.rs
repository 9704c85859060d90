use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};

mod commands;
mod io;

#[cfg(not(windows))]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[derive(Subcommand, Debug)]
enum Command {
    Generate(generate::Args),
    Plot(plot::Args),
    Query(query::Args),
    Summary(summary::Args),
}

#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Generate(args) => generate::run(args),
        Command::Plot(args) => plot::run(args),
        Command::Query(args) => query::run(args),
        Command::Summary(args) => summary::run(args),
    }
}
