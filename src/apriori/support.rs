use std::collections::HashMap;

use rayon::prelude::*;

use super::storage::FrequentLevel;

/// Immutable transaction corpus plus an inverted index from item to the
/// ascending list of transaction indices containing it. Built once before
/// mining starts; support queries never mutate it.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Vec<usize>>,
    postings: HashMap<usize, Vec<usize>>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions<I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = Vec<usize>>,
    {
        let mut store = Self::new();
        for transaction in transactions {
            store.push(transaction);
        }
        store
    }

    /// Adds one transaction. Input may be unsorted and contain duplicates;
    /// it is normalized to a canonical sorted set before indexing.
    pub fn push(&mut self, mut items: Vec<usize>) {
        items.sort_unstable();
        items.dedup();
        let tx_idx = self.transactions.len();
        for &item in &items {
            self.postings.entry(item).or_default().push(tx_idx);
        }
        self.transactions.push(items);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Vec<usize>] {
        &self.transactions
    }

    /// Distinct items across the corpus, ascending.
    pub fn distinct_items(&self) -> Vec<usize> {
        let mut items: Vec<usize> = self.postings.keys().copied().collect();
        items.sort_unstable();
        items
    }

    /// Number of transactions that contain `itemset` as a subset, computed
    /// by intersecting the posting lists of the itemset's members. An item
    /// never seen in the corpus yields 0.
    pub fn support(&self, itemset: &[usize]) -> usize {
        let mut lists = Vec::with_capacity(itemset.len());
        for item in itemset {
            match self.postings.get(item) {
                Some(list) => lists.push(list.as_slice()),
                None => return 0,
            }
        }
        let Some((&first, rest)) = lists.split_first() else {
            return 0;
        };

        let mut current: Vec<usize> = first.to_vec();
        for list in rest {
            current = intersect_sorted(&current, list);
            if current.is_empty() {
                return 0;
            }
        }
        current.len()
    }

    /// Supports for every candidate in a level, in candidate order.
    /// Candidates are independent, so counting parallelizes; collecting an
    /// indexed map keeps the result deterministic.
    pub fn count_level(&self, candidates: &FrequentLevel) -> Vec<usize> {
        (0..candidates.len())
            .into_par_iter()
            .map(|idx| self.support(candidates.get_itemset(idx)))
            .collect()
    }
}

fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
