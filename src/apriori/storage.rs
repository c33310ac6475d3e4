use std::collections::HashSet;

/// Flat arena for item sets of a single size. Items for all sets live in one
/// contiguous buffer; `offsets` holds `(start, len)` per set and `supports`
/// the per-set support count (0 until counted).
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    pub items: Vec<usize>,
    pub offsets: Vec<(usize, usize)>,
    pub supports: Vec<usize>,
}

/// All item sets of one size `itemset_size`, kept in canonical form
/// (each set sorted ascending) and in lexicographic order across sets.
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_itemset_with_support(&mut self, mut items: Vec<usize>, support: usize) {
        items.sort_unstable();
        items.dedup();
        let start = self.items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
    }

    pub(crate) fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self { storage: ItemsetStorage::new(), itemset_size }
    }

    /// Appends an item set; the input may be in any order and contain
    /// duplicates, canonicalization happens on insert.
    pub fn add_itemset(&mut self, items: Vec<usize>) -> usize {
        self.add_itemset_with_support(items, 0)
    }

    pub fn add_itemset_with_support(&mut self, items: Vec<usize>, support: usize) -> usize {
        self.storage.add_itemset_with_support(items, support);
        self.storage.len() - 1
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.supports[idx]
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[usize]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Item sets paired with their supports, in storage order.
    pub fn iter_with_support(&self) -> impl Iterator<Item = (&[usize], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.support(idx)))
    }

    /// Membership set over the level's canonical forms, used by the prune
    /// step one level up.
    pub fn itemset_index(&self) -> HashSet<&[usize]> {
        self.iter_itemsets().collect()
    }

    /// New level containing only the sets whose support meets `sigma`,
    /// preserving order.
    pub fn filter_by_support(&self, sigma: usize) -> FrequentLevel {
        let mut kept = FrequentLevel::new(self.itemset_size);
        for (itemset, support) in self.iter_with_support() {
            if support >= sigma {
                kept.add_itemset_with_support(itemset.to_vec(), support);
            }
        }
        kept
    }
}
