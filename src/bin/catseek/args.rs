use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catseek", about = "A cat chat companion for your terminal")]
pub struct CliArgs {
    #[arg(long, short = 'e')]
    pub engine: Option<String>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub theme: Option<String>,
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,
    #[arg(long)]
    pub list_engines: bool,
}
