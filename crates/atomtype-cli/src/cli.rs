use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "atomtype CLI - Inspect atom typers, their category names, and atom type mapping files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the category names of a typer, after any configured remapping.
    Names(NamesArgs),
    /// Print the Gnina atom category table.
    Table(TableArgs),
    /// Print the feature names of the Gnina vector typer.
    VectorNames,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TyperKind {
    /// Rule-based Gnina categories.
    Gnina,
    /// Atomic-number categories.
    Element,
}

/// Arguments for the `names` subcommand.
#[derive(Args, Debug)]
pub struct NamesArgs {
    /// Path to a typer configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Typer Overrides ---
    /// Select the typer, overriding the config file.
    #[arg(short, long, value_enum, value_name = "KIND")]
    pub typer: Option<TyperKind>,

    /// Report covalent radii instead of docking radii (Gnina typer only).
    #[arg(long)]
    pub covalent: bool,

    /// Atomic number cutoff of the element typer [default: from the config
    /// file, else 84].
    #[arg(long, value_name = "INT")]
    pub max_element: Option<usize>,

    // --- Mapping Overrides ---
    /// Remap the typer output with a mapping file, one new type per line.
    #[arg(short, long, value_name = "PATH", conflicts_with = "subset")]
    pub map: Option<PathBuf>,

    /// Keep only these original type ids, each as its own new type.
    #[arg(short, long, value_name = "IDS", value_delimiter = ',')]
    pub subset: Option<Vec<usize>>,

    /// Do not append a catch-all type for ids outside the subset.
    #[arg(long, requires = "subset")]
    pub no_catch_all: bool,
}

/// Arguments for the `table` subcommand.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Print tab-separated values instead of an aligned table.
    #[arg(long)]
    pub tsv: bool,
}
