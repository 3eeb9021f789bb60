//! USHV CLI - Command line tool for the 2022 U.S. health survey dashboard data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ushv",
    version,
    about = "U.S. health survey condition explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: ushv_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[USHV Debug] cli: starting");
    ushv_cmd::run(cli.command)
}
