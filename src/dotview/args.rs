use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dotview")]
#[command(version)]
#[command(about = "Read JSON documents through attribute paths and keyed records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding dotview.json (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a dot path (e.g. Schedule.events.0.name)
    #[command(alias = "g")]
    Get {
        /// JSON document
        file: PathBuf,

        /// Dot path; reserved keys are read with a trailing underscore.
        /// Keys containing '.' and the empty key cannot be reached by path
        #[arg(default_value = "")]
        path: String,
    },

    /// List the attribute names of the mapping at a dot path
    #[command(alias = "k")]
    Keys {
        /// JSON document
        file: PathBuf,

        #[arg(default_value = "")]
        path: String,
    },

    /// Call a mapping operation (keys, values, items, len, get, contains, copy)
    Call {
        /// JSON document
        file: PathBuf,

        /// Dot path of the mapping ("" for the document root)
        path: String,

        /// Operation name
        method: String,

        /// Arguments, parsed as JSON when possible
        #[arg(num_args = 0..)]
        args: Vec<String>,
    },

    /// Index the document's records and list their keys, or show one record
    #[command(alias = "r")]
    Records {
        /// JSON document
        file: PathBuf,

        /// Composite key, e.g. events.33950
        key: Option<String>,
    },

    /// Show or set configuration (group-root, serial-field)
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}
