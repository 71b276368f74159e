use anyhow::Result;
use clap::Parser;
use dataprep::discover::{find_latest, DEFAULT_EXTENSION};

#[derive(Parser)]
#[command(about = "Resolve the most recent dated drop for a prefix")]
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
    let latest = find_latest(&args.dir, &args.prefix, &args.ext)?;
    println!("{}", latest.display());
    Ok(())
}
