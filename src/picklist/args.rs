use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "picklist")]
#[command(about = "Build value/display option lists from JSON records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an option list from a JSON array of records
    #[command(alias = "b")]
    Build {
        /// Input file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Record field used as the option value
        #[arg(long)]
        value_field: Option<String>,

        /// Display text template, e.g. "{id} - {name}"
        #[arg(long)]
        display_format: Option<String>,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or set configuration
    Config {
        /// Config key (value_field, display_format)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}
