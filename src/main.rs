use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use apriori::{apriori_algorithm, io, MiningConfig};

#[derive(Debug, Parser)]
#[command(
    name = "apriori",
    about = "Identifies frequent item-sets of minimum size n with support of at least sigma"
)]
struct Cli {
    /// Path to the transaction log file
    transaction_log: PathBuf,

    /// Minimum size of the frequent item-set
    #[arg(short = 'n', long = "size", default_value_t = 3)]
    size: usize,

    /// Minimum support count (sigma)
    #[arg(short = 's', long = "sigma", default_value_t = 4)]
    sigma: usize,

    /// Path to the output file
    #[arg(short = 'o', long = "output", default_value = "output.txt")]
    output: PathBuf,

    /// Display verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = MiningConfig::new(cli.size, cli.sigma);
    config.validate()?;

    let store = io::read_transactions(&cli.transaction_log)
        .with_context(|| format!("loading {}", cli.transaction_log.display()))?;
    info!(
        transactions = store.len(),
        min_size = config.min_size,
        sigma = config.sigma,
        "transaction log loaded"
    );

    let levels = apriori_algorithm(&store, &config)?;
    let total: usize = levels.iter().map(|level| level.len()).sum();

    io::write_frequent_sets(&cli.output, &levels)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(
        frequent_itemsets = total,
        output = %cli.output.display(),
        "mining finished"
    );

    Ok(())
}
