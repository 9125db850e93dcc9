//! Command-line interface definition.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "prizedraw", about = "Prizedraw webapp client", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the startup flow and show the resulting screen.
    Status {
        /// Raw init payload handed over by the host.
        #[arg(long, env = "PRIZEDRAW_INIT_DATA")]
        init_data: Option<String>,
    },

    /// Run the startup flow, then attempt to join the raffle.
    Join {
        /// Raw init payload handed over by the host.
        #[arg(long, env = "PRIZEDRAW_INIT_DATA")]
        init_data: Option<String>,
    },

    /// Clear the stored token pair.
    Logout,

    /// Print name and version.
    Version,
}
