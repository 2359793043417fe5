use super::KmetroOperation;
use clap::Parser;

/// Kochi Metro timetable, fare and train position queries over a static dataset
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct KmetroApp {
    #[command(subcommand)]
    pub op: KmetroOperation,
    /// optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,
}
