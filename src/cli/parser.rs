use clap::{Parser, Subcommand};

/// Command-line interface definition for paytrack
#[derive(Parser)]
#[command(
    name = "paytrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record events and bucket them into fixed 14-day pay periods, persisted as CSV in a blob store",
    long_about = None
)]
pub struct Cli {
    /// Override the blob-store bucket (useful for tests or custom locations)
    #[arg(global = true, long = "bucket")]
    pub bucket: Option<String>,

    /// Override the object key of the persisted event table
    #[arg(global = true, long = "key")]
    pub key: Option<String>,

    /// Override the pay-period anchor date (YYYY-MM-DD)
    #[arg(global = true, long = "anchor")]
    pub anchor: Option<String>,

    /// Override the number of generated pay periods
    #[arg(global = true, long = "periods")]
    pub periods: Option<usize>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the bucket directory
    Init,

    /// Inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,
    },

    /// Record a new event
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Event name
        name: String,

        /// Time of the event (4 digits, 24h, e.g. 1330)
        #[arg(long = "time", help = "Event time as 4 digits, 24h (HHMM)")]
        time: String,

        /// Duration in minutes
        #[arg(long = "duration", help = "Event duration in minutes")]
        duration: Option<String>,
    },

    /// List all recorded events
    List {
        #[arg(long = "json", help = "Emit the event table as JSON")]
        json: bool,
    },

    /// Print the generated pay-period table
    Periods,
}
