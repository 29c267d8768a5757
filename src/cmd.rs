pub mod check;
pub mod compile;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    version,
    author,
    about = "Compile prefix call programs like (add 2 (subtract 4 2)) into add(2, subtract(4, 2));"
)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[clap(alias = "c")]
    Compile(compile::Opts),
    Check(check::Opts),
}

pub fn execute(opts: &Opts) -> anyhow::Result<()> {
    match &opts.command {
        Command::Compile(opts) => compile::execute(opts),
        Command::Check(opts) => check::execute(opts),
    }
}
