use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "receipt-processor",
    about = "Score receipts and serve their reward points over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Score a receipt JSON file without starting the server
    Score(ScoreArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoreArgs {
    pub path: PathBuf,
    /// Show the points awarded by each rule
    #[arg(long)]
    pub explain: bool,
}
