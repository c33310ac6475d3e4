use tracing::debug;

use super::candidates;
use super::storage::FrequentLevel;
use super::support::TransactionStore;
use crate::config::{ConfigurationError, MiningConfig};

/// Level-wise Apriori over an in-memory transaction store.
///
/// Starts from the singleton candidates, then alternates counting,
/// filtering by `sigma` and generating the next level until a level comes
/// up empty. Returns the frequent levels of size >= `min_size`, ascending
/// by size with each level in lexicographic itemset order.
pub fn apriori_algorithm(
    store: &TransactionStore,
    config: &MiningConfig,
) -> Result<Vec<FrequentLevel>, ConfigurationError> {
    config.validate()?;

    let mut output = Vec::new();
    let mut candidates = candidates::singletons(store);

    while !candidates.is_empty() {
        let supports = store.count_level(&candidates);
        for (idx, support) in supports.into_iter().enumerate() {
            candidates.storage.supports[idx] = support;
        }

        let frequent = candidates.filter_by_support(config.sigma);
        debug!(
            size = candidates.itemset_size,
            candidates = candidates.len(),
            frequent = frequent.len(),
            "level counted"
        );

        if frequent.is_empty() {
            break;
        }
        if frequent.itemset_size >= config.min_size {
            output.push(frequent.clone());
        }
        candidates = candidates::generate(&frequent);
    }

    Ok(output)
}
