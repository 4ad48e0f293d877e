use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, instrument};

use crate::coerce::{self, GOLDEN_COLUMN};
use crate::config::Config;
use crate::error::Result;
use crate::loader::Loader;
use crate::writer::Writer;

/// The six columns the visualization consumes, in output order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "_golden",
    "choose_one",
    "choose_one:confidence",
    "keyword",
    "location",
    "text",
];

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub input_file: String,
    /// `None` for check-only runs.
    pub output_file: Option<String>,
    pub rows: usize,
    pub golden_rows: usize,
    pub crowd_rows: usize,
    pub completed_at: DateTime<Utc>,
    pub duration_secs: f64,
}

pub struct Pipeline;

impl Pipeline {
    /// Run the complete projection pipeline: load, project, coerce, save.
    pub fn run(config: &Config) -> Result<PipelineResult> {
        Self::execute(config, true)
    }

    /// Validate the input without writing: load, schema check, coercion dry-run.
    pub fn check(config: &Config) -> Result<PipelineResult> {
        Self::execute(config, false)
    }

    #[instrument(skip(config), fields(input = %config.input.path.display()))]
    fn execute(config: &Config, write_output: bool) -> Result<PipelineResult> {
        let t_pipeline = Instant::now();
        let delimiter = config.delimiter_byte()?;

        // Step 1: Load the source table
        info!("📥 Loading {}...", config.input.path.display());
        println!("📥 Loading {}...", config.input.path.display());
        let loader = Loader::new(&config.input.encoding, delimiter);
        let table = loader.load(&config.input.path)?;
        info!(
            "✅ Loaded {} rows, {} columns",
            table.row_count(),
            table.columns().len()
        );
        println!(
            "✅ Loaded {} rows, {} columns",
            table.row_count(),
            table.columns().len()
        );

        // Step 2: Schema check before any transformation
        table.require_columns(&OUTPUT_COLUMNS)?;

        // Step 3: Project onto the six output columns
        info!("🔧 Projecting {} columns...", OUTPUT_COLUMNS.len());
        println!("🔧 Projecting {} columns...", OUTPUT_COLUMNS.len());
        let mut projected = table.select(&OUTPUT_COLUMNS)?;

        // Step 4: Coerce the golden flag to a strict boolean
        let mut golden_rows = 0usize;
        let mut crowd_rows = 0usize;
        projected.map_column(GOLDEN_COLUMN, |row, raw| {
            let value = coerce::parse_bool(row, raw)?;
            if value {
                golden_rows += 1;
            } else {
                crowd_rows += 1;
            }
            Ok(coerce::format_bool(value).to_string())
        })?;
        info!(
            "✅ Coerced {}: {} golden, {} crowd-labeled rows",
            GOLDEN_COLUMN, golden_rows, crowd_rows
        );
        println!(
            "✅ Coerced {}: {} golden, {} crowd-labeled rows",
            GOLDEN_COLUMN, golden_rows, crowd_rows
        );

        // Step 5: Save the projected table
        let output_file = if write_output {
            let writer = Writer::new(&config.output.encoding, delimiter);
            writer.save(&projected, &config.output.path)?;
            info!("💾 Saved projected table to {}", config.output.path.display());
            println!("💾 Saved projected table to {}", config.output.path.display());
            Some(config.output.path.display().to_string())
        } else {
            info!("🔎 Check only, skipping write");
            println!("🔎 Check only, skipping write");
            None
        };

        Ok(PipelineResult {
            input_file: config.input.path.display().to_string(),
            output_file,
            rows: projected.row_count(),
            golden_rows,
            crowd_rows,
            completed_at: Utc::now(),
            duration_secs: t_pipeline.elapsed().as_secs_f64(),
        })
    }
}
