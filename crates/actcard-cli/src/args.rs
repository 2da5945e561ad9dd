use crate::types::{ColorMode, OutputFormat};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "actcard")]
#[command(about = "Resolve and render client-desk activity records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml (defaults to ~/.config/actcard/config.toml)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    #[arg(
        long,
        global = true,
        help = "Reference date for deadline badges (YYYY-MM-DD, defaults to the current UTC date)"
    )]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render the compact activity card")]
    Card {
        #[arg(help = "Activity document (JSON file); omitted or '-' reads stdin")]
        file: Option<PathBuf>,

        #[arg(long, help = "Render the loading skeleton instead of reading a document")]
        loading: bool,

        #[arg(
            long,
            value_name = "MESSAGE",
            conflicts_with = "loading",
            help = "Render the fetch-failure card with the given message"
        )]
        failed: Option<String>,

        #[arg(long, value_name = "CODE", requires = "failed", help = "HTTP status for --failed")]
        status: Option<u16>,
    },

    #[command(about = "Render the expanded detail view")]
    Details {
        #[arg(help = "Activity document (JSON file); omitted or '-' reads stdin")]
        file: Option<PathBuf>,

        #[arg(long, help = "Write email/news markup to a temp file and report its path")]
        open_markup: bool,
    },

    #[command(about = "Print resolved presentation facts as JSON")]
    Facts {
        #[arg(help = "Activity document (JSON file); omitted or '-' reads stdin")]
        file: Option<PathBuf>,
    },
}
