use std::path::PathBuf;

use clap::{Parser, Subcommand};
use core_types::DtypeFormat;

#[derive(Parser, Debug)]
#[command(name = "opinfo", version, about = "Inspect the TBE op-info registry")]
pub struct Cli {
    /// Log filter (RUST_LOG syntax)
    #[arg(long, global = true, default_value = "warn")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered ops
    List,

    /// Print an op's descriptor as op-info JSON
    Show {
        /// Op name, e.g. Assign
        op: String,

        /// Indent the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Dump every registered descriptor as one JSON array
    Dump,

    /// Select the kernel for a concrete call
    Select {
        /// Op name, e.g. Assign
        op: String,

        /// Input ports as dtype:format, comma separated (float32:5HD,float32:5HD)
        #[arg(long, value_delimiter = ',', required = true)]
        inputs: Vec<DtypeFormat>,

        /// Output ports as dtype:format, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        outputs: Vec<DtypeFormat>,

        /// Selector config (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
