//! casekit CLI entrypoint
//! Parses command-line arguments and dispatches to the core conversion library.

// External imports (alphabetized)
use anyhow::Context;
use casekit_core::{convert_value, convert_with, Case};
use clap::Parser;

#[derive(Parser)]
#[command(name = "casekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Convert one or more values to a target casing convention
    Convert {
        /// Target case (camel, kebab, dot, space-join-camel)
        #[arg(long, default_value = "camel")]
        case: String,
        /// Preserve characters outside letters, digits and the joiner
        /// (kebab case only)
        #[arg(long)]
        keep_special_chars: bool,
        /// Parse each input as a JSON value before validation, so
        /// non-string values are rejected with their category message
        ///
        /// Example: --json '123'
        /// Example: --json '"XMLHttpRequest"'
        #[arg(long)]
        json: bool,
        /// Values to convert, one output line per value
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// List the supported casing strategies
    Cases,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Convert {
            case,
            keep_special_chars,
            json,
            inputs,
        } => {
            let case: Case = case
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid case '{case}': {e}"))?;
            tracing::debug!("converting {} value(s) to {}", inputs.len(), case);

            for input in inputs {
                let converted = if *json {
                    let value: serde_json::Value = serde_json::from_str(input)
                        .with_context(|| format!("Input is not valid JSON: {input}"))?;
                    convert_value(&value, case, *keep_special_chars)?
                } else {
                    convert_with(input, case, *keep_special_chars)
                };
                println!("{converted}");
            }
        }
        Commands::Cases => {
            for case in Case::all() {
                println!("{case}");
            }
        }
    }
    Ok(())
}
