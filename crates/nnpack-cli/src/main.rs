// crates/nnpack-cli/src/main.rs

use clap::{Parser, Subcommand};
use nnpack_cli::cmd;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nnpack-cli")]
#[command(about = "Weight packer built on an oracle-search arithmetic codec", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quantize a weight list and pack it into .npk
    Compress(cmd::compress::CompressArgs),

    /// Unpack a .npk back to (dequantized) weights
    Decompress(cmd::decompress::DecompressArgs),

    /// Inspect a .npk artifact (magic/crc, table id, sizes)
    Inspect(cmd::inspect::InspectArgs),

    /// Analyze a weight list: magnitude classes, cutoffs, entropy, zstd scoreboard
    Analyze(cmd::analyze::AnalyzeArgs),

    /// Emit a C++ source file with the cutoff table and compressed bytes
    Header(cmd::header::HeaderArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Compress(args) => cmd::compress::run(args),
        Commands::Decompress(args) => cmd::decompress::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Header(args) => cmd::header::run(args),
    }
}
