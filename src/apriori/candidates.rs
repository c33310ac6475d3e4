use super::storage::FrequentLevel;
use super::support::TransactionStore;

/// Level-1 candidates: one singleton per distinct item in the corpus,
/// ascending. No join or prune applies at this size.
pub fn singletons(store: &TransactionStore) -> FrequentLevel {
    let mut level = FrequentLevel::new(1);
    for item in store.distinct_items() {
        level.add_itemset(vec![item]);
    }
    level
}

/// Size-(k+1) candidates from the frequent k-itemsets: join pairs sharing
/// their first k-1 items, then prune every candidate with an infrequent
/// k-subset. The input level is lexicographically sorted, so joinable pairs
/// sit in contiguous equal-prefix runs and the output comes out sorted and
/// duplicate-free.
pub fn generate(frequent: &FrequentLevel) -> FrequentLevel {
    let k = frequent.itemset_size;
    let mut candidates = FrequentLevel::new(k + 1);
    if k == 0 || frequent.len() < 2 {
        return candidates;
    }

    let index = frequent.itemset_index();

    let mut run_start = 0;
    while run_start < frequent.len() {
        let prefix = &frequent.get_itemset(run_start)[..k - 1];
        let mut run_end = run_start + 1;
        while run_end < frequent.len() && &frequent.get_itemset(run_end)[..k - 1] == prefix {
            run_end += 1;
        }

        for i in run_start..run_end {
            for j in (i + 1)..run_end {
                let left = frequent.get_itemset(i);
                let right = frequent.get_itemset(j);
                let mut joined = left.to_vec();
                joined.push(right[k - 1]);

                if survives_prune(&joined, &index) {
                    candidates.add_itemset(joined);
                }
            }
        }
        run_start = run_end;
    }

    candidates
}

/// Monotonicity check: every k-subset of the joined candidate must be
/// frequent. The two parents cover the subsets omitting one of the last two
/// positions, so only omissions of the first k-1 positions are tested.
fn survives_prune(
    candidate: &[usize],
    frequent: &std::collections::HashSet<&[usize]>,
) -> bool {
    let k = candidate.len() - 1;
    let mut subset = Vec::with_capacity(k);
    for omit in 0..k.saturating_sub(1) {
        subset.clear();
        subset.extend(candidate.iter().enumerate().filter_map(|(pos, &item)| {
            (pos != omit).then_some(item)
        }));
        if !frequent.contains(subset.as_slice()) {
            return false;
        }
    }
    true
}
