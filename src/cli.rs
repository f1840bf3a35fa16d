use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calq", version, about = "Calq CLI: service pricing quotes")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recompute and display the current quote
    Show,
    /// Mark a service as part of the quote
    Select { service: String },
    /// Take a service out of the quote
    Deselect { service: String },
    /// Set the hours of a service
    Hours { service: String, hours: f64 },
    /// Snapshot the current quote into the history
    Save,
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    List,
    Show {
        id: String,
    },
    /// Write the plain-text summary of a saved quote
    Export {
        id: String,
        #[arg(long, help = "Destination file (stdout when omitted)")]
        out: Option<PathBuf>,
    },
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
    Set {
        #[arg(long, help = "Hours covered by the reference cost")]
        reference_hours: Option<f64>,
        #[arg(long, help = "Total cost at the reference hours")]
        reference_cost: Option<f64>,
        #[arg(long, help = "Margin percent applied to the gross cost")]
        margin: Option<f64>,
        #[arg(long, help = "Tax percent applied after the margin")]
        tax: Option<f64>,
    },
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    List,
    Add {
        name: String,
        #[arg(long)]
        hours: f64,
    },
    /// Remove a custom service (built-ins are fixed)
    Remove { name: String },
    /// Restore the built-in catalog and drop custom services
    Reset,
}
