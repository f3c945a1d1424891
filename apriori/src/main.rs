//! goapriori - frequent itemset mining from a transaction file

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use apriori::report::{write_report, write_summary};
use apriori::{Apriori, MinerConfig};

#[derive(Parser)]
#[command(name = "goapriori")]
#[command(version)]
#[command(about = "Frequent itemset mining with the Apriori algorithm", long_about = None)]
struct Cli {
    /// Transaction database, one transaction of space separated items per line
    #[arg(short = 'f', long = "file", env = "APRIORI_FILE")]
    file: PathBuf,

    /// Minimal support (0~1)
    #[arg(short = 'm', long = "minsup", env = "APRIORI_MINSUP")]
    minsup: f64,

    /// Show log
    #[arg(short = 'l', long = "log")]
    log: bool,
}

fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match MinerConfig::new(cli.file, cli.minsup) {
        Ok(config) => config.with_log(cli.log),
        Err(e) => {
            init_logging(Level::ERROR)?;
            error!("{e}");
            return Err(e.into());
        }
    };
    init_logging(config.log_level())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "Apriori written in Rust")?;

    let mut apriori = Apriori::new();

    info!(file = %config.input.display(), "start to read the db file");
    apriori
        .read_file(&config.input)
        .inspect_err(|e| error!(file = %config.input.display(), "{e}"))?;
    info!(file = %config.input.display(), "finish to read the db file");

    write_summary(&mut out, &apriori)?;
    out.flush()?;

    info!(minsup = config.minsup, "set minsup");
    apriori.set_minsup(config.minsup);
    apriori.run();

    write_report(&mut out, &apriori)?;
    out.flush()?;
    Ok(())
}
