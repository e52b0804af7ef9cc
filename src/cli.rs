use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// NPK Blend: find the fewest fertilizer ingredients that hit an N-P-K target.
#[derive(Parser, Debug)]
#[command(name = "npk_blend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the ingredient library JSON file.
    #[arg(short, long, global = true, default_value = "ingredients.json")]
    pub file: String,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate a blend from the library.
    Calc(CalcArgs),

    /// List the ingredients in the library.
    List,
}

impl Default for Command {
    fn default() -> Self {
        Command::List
    }
}

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    /// Target nitrogen percentage.
    #[arg(long, default_value = "10")]
    pub n: f64,

    /// Target phosphorus percentage.
    #[arg(long, default_value = "10")]
    pub p: f64,

    /// Target potassium percentage.
    #[arg(long, default_value = "10")]
    pub k: f64,

    /// Total blend weight in grams.
    #[arg(long, default_value = "1000")]
    pub weight: f64,

    /// Tolerance as a percentage of each target.
    #[arg(long, default_value = "5")]
    pub tolerance: f64,

    /// Dosing increment in grams.
    #[arg(long, default_value = "10")]
    pub increment: f64,

    /// Restrict candidates to these ingredients (fuzzy-matched, repeatable).
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Write the recipe to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Prompt for targets and amounts, using the flags as defaults.
    #[arg(short, long)]
    pub interactive: bool,
}
