pub mod apriori;
pub mod config;
pub mod io;

pub use apriori::{apriori_algorithm, FrequentLevel, ItemsetStorage, TransactionStore};
pub use config::{ConfigurationError, MiningConfig};
