use anyhow::{Context, Result};
use clap::Parser;
use csv::ReaderBuilder;
use dataprep::convert::to_record_batch;
use dataprep::discover::{find_latest, DEFAULT_EXTENSION};
use tracing::info;

#[derive(Parser)]
#[command(about = "Report the resolved column types of the most recent dated drop")]
struct Args {
    /// Filename prefix, e.g. `sales` for `sales_27Feb2025.csv`
    prefix: String,
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    ext: String,
    #[arg(long, default_value = "./data")]
    dir: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();

    // ─── 1) resolve the newest drop ──────────────────────────────────
    let latest = find_latest(&args.dir, &args.prefix, &args.ext)?;

    // ─── 2) load it column-wise ──────────────────────────────────────
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(&latest)
        .with_context(|| format!("opening {}", latest.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.context("reading CSV record")?;
        for (i, field) in record.iter().enumerate() {
            if let Some(column) = columns.get_mut(i) {
                column.push(field.to_string());
            }
        }
    }

    // ─── 3) coerce & report ──────────────────────────────────────────
    let batch = to_record_batch(&headers, columns)?;
    info!(rows = batch.num_rows(), "loaded {}", latest.display());
    for field in batch.schema().fields() {
        info!(column = %field.name(), dtype = ?field.data_type(), "resolved");
    }

    Ok(())
}
