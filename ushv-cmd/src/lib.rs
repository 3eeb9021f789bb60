//! Command implementations for the USHV CLI.
//!
//! Lists the tracked conditions, prints the national state map for one
//! condition, or runs a full dashboard render pass, optionally after a
//! simulated click on the map.

use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;

pub mod inspect;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// List condition identifiers and their display labels
    Conditions,

    /// Print cases per state for one condition as JSON
    Map {
        /// Path to the survey CSV (optionally .gz)
        #[arg(short = 'd', long, env = "USHV_DATA")]
        data: PathBuf,

        /// Condition identifier, e.g. HadAsthma
        #[arg(short = 'c', long)]
        condition: String,
    },

    /// Compute every dashboard panel for one condition as JSON
    Render {
        /// Path to the survey CSV (optionally .gz)
        #[arg(short = 'd', long, env = "USHV_DATA")]
        data: PathBuf,

        /// Condition identifier, e.g. HadAsthma
        #[arg(short = 'c', long)]
        condition: String,

        /// Click this state on the map before rendering
        #[arg(long)]
        click: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Conditions => inspect::write_conditions(&mut out),
        Command::Map { data, condition } => inspect::write_state_map(&mut out, &data, &condition),
        Command::Render {
            data,
            condition,
            click,
            pretty,
        } => render::write_render(&mut out, &data, &condition, click.as_deref(), pretty),
    }?;
    out.flush()?;
    Ok(())
}
