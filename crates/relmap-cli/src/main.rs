use relmap_cli::generate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print entity descriptions for a JSON schema
    Generate {
        /// Schema file
        schema: PathBuf,

        /// JSON configuration file
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Only generate these tables
        #[clap(short, long = "table")]
        tables: Vec<String>,

        /// Pretty-print the output
        #[clap(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            schema,
            config,
            tables,
            pretty,
        } => {
            let options = generate::Options {
                schema,
                config,
                tables,
                pretty,
            };
            let output = generate::exec(&options)?;
            println!("{output}");
            Ok(())
        }
    }
}
