use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "collection2k6")]
#[command(version)]
#[command(about = "Convert recorded request collections to k6 load-test scripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a collection to a k6 script
    Convert {
        /// Path to the collection file
        collection: PathBuf,

        /// Global variables file
        #[arg(short, long)]
        globals: Option<PathBuf>,

        /// Environment variables file
        #[arg(short, long)]
        environment: Option<PathBuf>,

        /// JSON data file providing per-iteration rows
        #[arg(short, long, conflicts_with = "csv")]
        json: Option<PathBuf>,

        /// CSV data file providing per-iteration rows
        #[arg(short, long)]
        csv: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },

    /// List the requests recorded in a collection
    List {
        /// Path to the collection file
        collection: PathBuf,
    },
}
