mod index;
mod query;
mod show;

use clap::{Parser, Subcommand};
use modscope_core::logging::{LogTarget, init_logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "modscope",
    version,
    about = "Inspect and query module annotation indices",
    long_about = "modscope builds module mapping indices (module name -> module-level annotations) \
                  and answers which annotations a compiled module declares, aggregating every \
                  index in the order it is given."
)]
pub struct Cli {
    /// Also write log output to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index from a JSON manifest
    #[command(
        long_about = "Reads a JSON array of {\"module\", \"annotations\", \"origin\"} objects and \
                            writes a compressed index. Without --output the index is stored in \
                            ~/.modscope/indices/ (or $MODSCOPE_INDEX_DIR)."
    )]
    Build {
        /// Path to the JSON manifest
        #[arg(long, value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Destination of the index file
        #[arg(long, value_name = "INDEX")]
        output: Option<PathBuf>,
    },
    /// List the mappings stored in an index
    Show {
        /// Path to the index file
        #[arg(value_name = "INDEX")]
        index: PathBuf,
    },
    /// Print the annotations declared on a module
    #[command(
        long_about = "Looks MODULE up by name: registers every --index as a provider, in the order \
                            given, and prints the concatenated annotations. Duplicates are kept."
    )]
    Query {
        /// Module name to look up
        #[arg(value_name = "MODULE", default_value = modscope_api::DEFAULT_MODULE_NAME)]
        module: String,
        /// Index files to query, in order
        #[arg(long = "index", value_name = "INDEX", env = "MODSCOPE_INDEX", value_delimiter = ',', required = true)]
        indices: Vec<PathBuf>,
        /// Print dotted fully qualified names instead of class ids
        #[arg(long)]
        fqn: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let target = if cli.verbose {
        LogTarget::FileAndStderr
    } else {
        LogTarget::File
    };
    let _guard = init_logging("cli", target);

    match cli.command {
        Commands::Build { manifest, output } => index::run(manifest, output),
        Commands::Show { index } => show::run(index),
        Commands::Query {
            module,
            indices,
            fqn,
        } => query::run(module, indices, fqn),
    }
}
