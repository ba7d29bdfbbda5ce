use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_OUTPUT_DIR: &str = "PinnedH2O_3dof_coords";

#[derive(Parser)]
#[command(
    name = "pscan",
    about = "Bond-length and bond-angle grid scans of a pinned water molecule",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write one coordinate file per grid point
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Report the bond lengths and angle of a coordinate file
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Generate(args) => args.quiet,
            Command::Inspect(args) => args.quiet,
        }
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Directory receiving the coordinate files (created if missing)
    #[arg(
        short,
        long = "output-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub scan: ScanOptions,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Where the reference geometry and grid axes come from.
#[derive(Args)]
#[command(next_help_heading = "Scan Definition")]
pub struct ScanOptions {
    /// Scan configuration (TOML); keys left out keep the built-in values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Take the reference O, H1 and H2 from an existing coordinate file
    #[arg(short, long, value_name = "FILE")]
    pub reference: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Coordinate file to inspect
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print only the measured values
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
