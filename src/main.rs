use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;

use tweetviz_prep::config::Config;
use tweetviz_prep::error::Result;
use tweetviz_prep::logging;
use tweetviz_prep::pipeline::{Pipeline, PipelineResult};

#[derive(Parser)]
#[command(name = "tweetviz_prep")]
#[command(about = "Prepares tweet annotation CSV data for interactive visualization")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to an alternate configuration file (default: projector.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the projection pipeline: load, project, coerce, save
    Run {
        /// Source CSV file (overrides the config file)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Destination CSV file (overrides the config file)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Character encoding of the source file, e.g. iso-8859-1
        #[arg(long)]
        input_encoding: Option<String>,
        /// Character encoding of the destination file, e.g. utf-8
        #[arg(long)]
        output_encoding: Option<String>,
        /// Print the run summary as JSON instead of the human-readable report
        #[arg(long)]
        json: bool,
    },
    /// Validate the input table without writing the output file
    Check {
        /// Source CSV file (overrides the config file)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Character encoding of the source file, e.g. iso-8859-1
        #[arg(long)]
        input_encoding: Option<String>,
        /// Print the run summary as JSON instead of the human-readable report
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run_command(cli) {
        error!("Pipeline failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run_command(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Run {
            input,
            output,
            input_encoding,
            output_encoding,
            json,
        } => {
            if let Some(path) = input {
                config.input.path = path;
            }
            if let Some(path) = output {
                config.output.path = path;
            }
            if let Some(enc) = input_encoding {
                config.input.encoding = enc;
            }
            if let Some(enc) = output_encoding {
                config.output.encoding = enc;
            }

            println!("🚀 Running projection pipeline...");
            let result = Pipeline::run(&config)?;
            report(&result, json)
        }
        Commands::Check {
            input,
            input_encoding,
            json,
        } => {
            if let Some(path) = input {
                config.input.path = path;
            }
            if let Some(enc) = input_encoding {
                config.input.encoding = enc;
            }

            println!("🔎 Checking input table...");
            let result = Pipeline::check(&config)?;
            report(&result, json)
        }
    }
}

fn report(result: &PipelineResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("\n📊 Pipeline Results:");
    println!("   Rows: {}", result.rows);
    println!("   Golden rows: {}", result.golden_rows);
    println!("   Crowd-labeled rows: {}", result.crowd_rows);
    match &result.output_file {
        Some(file) => println!("   Output file: {file}"),
        None => println!("   Output file: (check only, nothing written)"),
    }
    Ok(())
}
