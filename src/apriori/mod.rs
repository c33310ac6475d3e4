pub mod candidates;
pub mod mining;
pub mod storage;
pub mod support;

pub use mining::apriori_algorithm;
pub use storage::{FrequentLevel, ItemsetStorage};
pub use support::TransactionStore;
