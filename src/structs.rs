use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a certificate chain and private key under a name.
    Put {
        name: String,
        /// PEM file holding the certificate chain.
        #[arg(long)]
        cert: PathBuf,
        /// PEM file holding the private key.
        #[arg(long)]
        key: PathBuf,
    },
    /// Print the hostnames covered by stored bundles (all bundles if no name is given).
    Validate {
        names: Vec<String>,
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Remove a stored bundle.
    Delete {
        name: String,
    },
    /// List stored bundle names.
    List,
}
