//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tumorboard", version, about = "Therapy recommendation board for one patient")]
pub struct Cli {
    /// Config file; defaults to $TUMORBOARD_CONFIG or ./tumorboard.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the table rows of a patient bundle as JSON
    Rows {
        /// Patient bundle JSON
        #[arg(short, long)]
        input: PathBuf,
        /// Resolve PubMed titles before printing
        #[arg(long)]
        resolve: bool,
    },
    /// Resolve and print the names of all PubMed references
    References {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Write the recommendations download file
    Export {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print a fresh recommendation for a patient
    New {
        #[arg(long)]
        patient_id: String,
        /// Pre-fill the comment with the creation time
        #[arg(long)]
        sample: bool,
    },
}
