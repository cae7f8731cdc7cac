pub mod about;
pub mod convert;
pub mod form;
pub mod systems;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ghcoord")]
#[command(about = "Convert coordinates between WGS 84 and the Ghana grids.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less, repeat to print only results
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Log more, repeat for trace output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transform a single coordinate pair
    #[command(alias = "c")]
    Convert {
        /// Longitude or easting
        #[arg(allow_hyphen_values = true)]
        x: String,
        /// Latitude or northing
        #[arg(allow_hyphen_values = true)]
        y: String,
        /// Transformation, as a label or slug (see `systems`)
        #[arg(short, long, default_value = "WGS 84 to Ghana National Grid")]
        transformation: String,
        /// Save the result report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Open an interactive conversion form
    #[command(alias = "f")]
    Form,
    /// List reference systems and transformations
    #[command(alias = "s")]
    Systems,
    /// Show information about the tool
    #[command(alias = "a")]
    About,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
