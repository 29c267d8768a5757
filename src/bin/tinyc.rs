use clap::Parser;
use tinyc::cmd;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = cmd::Opts::parse();
    cmd::execute(&opts)
}
