//! CCY CLI - Command line tool for currency comparison links.

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(
    name = "ccy-cli",
    version,
    about = "Read and build currency comparison links"
)]
struct Cli {
    #[command(subcommand)]
    command: cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cmd::run(cli.command)
}
