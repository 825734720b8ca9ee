pub mod balance;
pub mod columns;
pub mod init;
pub mod parse;
pub mod query_dates;

use std::path::Path;

use clap::{Parser, Subcommand};
use tdhistory::settings::OutputFormat;
use tdhistory::{Result, TableSnapshot};

#[derive(Parser)]
#[command(name = "tdhistory", about = "Turn scraped account-history tables into ledger records.")]
pub struct Cli {
    /// Log reconstruction details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write default settings to ~/.config/tdhistory/settings.json.
    Init {
        /// Overwrite existing settings
        #[arg(long)]
        force: bool,
    },
    /// Reconstruct ledger records from a page snapshot.
    Parse {
        /// Snapshot file (JSON, or CSV with a header row)
        snapshot: String,
        /// Output format (default from settings)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<String>,
        /// Current account balance, e.g. '$1,234.56'; overrides the page's widget
        #[arg(long)]
        balance: Option<String>,
        /// Read the snapshot as CSV regardless of extension
        #[arg(long)]
        csv: bool,
    },
    /// Print the account balance shown on a page snapshot.
    Balance {
        /// Snapshot file (JSON, or CSV with a header row)
        snapshot: String,
        /// Read the snapshot as CSV regardless of extension
        #[arg(long)]
        csv: bool,
    },
    /// List the column headers that will be parsed.
    Columns,
    /// Print a date range the way the history page's search fields expect it.
    QueryDates {
        /// First day, in any readable date form
        start: String,
        /// Last day; left blank on the page when omitted
        end: Option<String>,
    },
}

pub(crate) fn load_snapshot(path: &str, csv: bool) -> Result<TableSnapshot> {
    let path = Path::new(path);
    if csv {
        TableSnapshot::load_csv(path)
    } else {
        TableSnapshot::load(path)
    }
}
