mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuidkit::{Format, TimeLayout};

#[derive(Parser)]
#[command(name = "uuidkit")]
#[command(about = "Generate, convert and compare 128-bit identifiers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate new identifiers
    New {
        /// time-ordered (alias v1) or sort-optimized (alias mysql)
        #[arg(long)]
        layout: Option<TimeLayout>,
        /// How many identifiers to print
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Output format letter (N, D, B, P or X)
        #[arg(long)]
        format: Option<Format>,
    },
    /// Re-emit an identifier in another format
    Convert {
        /// Identifier text in any format
        text: String,
        /// Require the input to be in this format
        #[arg(long)]
        from: Option<Format>,
        /// Output format letter (N, D, B, P or X)
        #[arg(long)]
        format: Option<Format>,
    },
    /// Compare two identifiers byte-wise
    Compare {
        /// Left-hand identifier
        a: String,
        /// Right-hand identifier
        b: String,
    },
    /// Show the bytes and every format of an identifier
    Inspect {
        /// Identifier text in any format
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG wins when set; otherwise only warnings from this crate are shown.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("uuidkit=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env()?;

    match cli.command {
        Some(Commands::New {
            layout,
            count,
            format,
        }) => {
            let layout = layout.unwrap_or(config.default_layout());
            let format = format.unwrap_or(config.default_format());
            tracing::debug!(%layout, count, %format, "generating identifiers");
            let mut stdout = std::io::stdout().lock();
            for id in commands::new_ids(layout, count, format) {
                writeln!(stdout, "{id}")?;
            }
        }
        Some(Commands::Convert { text, from, format }) => {
            let format = format.unwrap_or(config.default_format());
            println!("{}", commands::convert(&text, from, format)?);
        }
        Some(Commands::Compare { a, b }) => {
            println!("{}", commands::compare(&a, &b)?);
        }
        Some(Commands::Inspect { text }) => {
            for line in commands::inspect(&text)? {
                println!("{line}");
            }
        }
        None => {
            println!("Use 'uuidkit --help' for commands");
        }
    }

    Ok(())
}
