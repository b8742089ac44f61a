//! History state container: app-owned, injected where it is needed.

use super::ConversionRecord;
use crate::shared::PairKey;
use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Handle shared by the conversion engine, chart renderer and controller.
pub type SharedHistory = Arc<RwLock<HistoryStore>>;

/// Per-pair conversion history.
///
/// Each pair's records are kept oldest first. There is no eviction and no
/// size bound; the store lives as long as its owner.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    data: HashMap<PairKey, Vec<ConversionRecord>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh, empty store behind a shared handle.
    pub fn shared() -> SharedHistory {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Append a record, creating the pair's sequence on first use.
    pub fn append(&mut self, pair_key: PairKey, record: ConversionRecord) {
        self.data.entry(pair_key).or_default().push(record);
    }

    /// Records for `pair_key`, oldest first. Empty if the pair was never used.
    pub fn get(&self, pair_key: &PairKey) -> &[ConversionRecord] {
        self.data.get(pair_key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records for `pair_key`, newest first (display order).
    pub fn iter_newest_first<'a>(
        &'a self,
        pair_key: &PairKey,
    ) -> impl Iterator<Item = &'a ConversionRecord> + 'a {
        self.get(pair_key).iter().rev()
    }

    pub fn latest(&self, pair_key: &PairKey) -> Option<&ConversionRecord> {
        self.get(pair_key).last()
    }

    pub fn len(&self, pair_key: &PairKey) -> usize {
        self.get(pair_key).len()
    }

    /// True when no pair holds any record.
    pub fn is_empty(&self) -> bool {
        self.data.values().all(Vec::is_empty)
    }

    /// Pairs with at least one record, sorted by key.
    pub fn pairs(&self) -> Vec<&PairKey> {
        let mut keys: Vec<_> = self
            .data
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(key, _)| key)
            .collect();
        keys.sort();
        keys
    }

    /// Drop every pair's history, not only the selected one.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CurrencyCode;
    use chrono::Utc;

    fn key(from: &str, to: &str) -> PairKey {
        PairKey::new(&CurrencyCode::from(from), &CurrencyCode::from(to))
    }

    fn record(amount: f64) -> ConversionRecord {
        ConversionRecord::new(amount, 2.0, Utc::now())
    }

    #[test]
    fn test_get_missing_pair_is_empty() {
        let store = HistoryStore::new();
        assert!(store.get(&key("USD", "INR")).is_empty());
        assert!(store.is_empty());
        assert!(store.latest(&key("USD", "INR")).is_none());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = HistoryStore::new();
        let k = key("USD", "INR");
        for amount in [1.0, 2.0, 3.0, 4.0, 5.0] {
            store.append(k.clone(), record(amount));
        }
        let amounts: Vec<f64> = store.get(&k).iter().map(|r| r.amount).collect();
        assert_eq!(amounts, [1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(store.len(&k), 5);
        assert_eq!(store.latest(&k).unwrap().amount, 5.0);

        let newest_first: Vec<f64> = store.iter_newest_first(&k).map(|r| r.amount).collect();
        assert_eq!(newest_first, [5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_pairs_are_directional() {
        let mut store = HistoryStore::new();
        store.append(key("USD", "INR"), record(1.0));
        store.append(key("INR", "USD"), record(2.0));
        store.append(key("INR", "USD"), record(3.0));
        assert_eq!(store.len(&key("USD", "INR")), 1);
        assert_eq!(store.len(&key("INR", "USD")), 2);
        let pairs: Vec<_> = store.pairs().iter().map(|k| k.as_str()).collect();
        assert_eq!(pairs, ["INR_USD", "USD_INR"]);
    }

    #[test]
    fn test_clear_empties_all_pairs() {
        let mut store = HistoryStore::new();
        store.append(key("USD", "INR"), record(1.0));
        store.append(key("EUR", "GBP"), record(2.0));
        store.clear();
        assert!(store.is_empty());
        assert!(store.get(&key("USD", "INR")).is_empty());
        assert!(store.get(&key("EUR", "GBP")).is_empty());
        assert!(store.pairs().is_empty());
    }

    #[tokio::test]
    async fn test_shared_handle() {
        let shared = HistoryStore::shared();
        shared.write().await.append(key("USD", "INR"), record(10.0));
        let clone = shared.clone();
        assert_eq!(clone.read().await.len(&key("USD", "INR")), 1);
    }
}
