//! Lock-free id-keyed table backing each record type.
//!
//! Reads never block writers. Ids come from a per-table atomic counter, so
//! ascending id order is creation order; listings are returned in that order.

use crate::model::RecordId;
use scc::HashMap as SccHashMap;
use std::sync::atomic::{AtomicU32, Ordering};

/// First id handed out by a fresh table
pub const FIRST_ID: RecordId = 1;

/// One record collection with its own id sequence
pub struct IdTable<V>
where
    V: Clone + Send + Sync + 'static,
{
    map: SccHashMap<RecordId, V>,
    next_id: AtomicU32,
}

impl<V> IdTable<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self { map: SccHashMap::new(), next_id: AtomicU32::new(FIRST_ID) }
    }

    /// Take the next id. The counter advances even if the caller then fails
    /// to build or insert the record.
    pub fn allocate_id(&self) -> RecordId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Allocate an id, build the record from it and store it
    pub fn create_with<F>(&self, build: F) -> V
    where
        F: FnOnce(RecordId) -> V,
    {
        let id = self.allocate_id();
        let record = build(id);
        self.insert(id, record.clone());
        record
    }

    /// Store a record under an id obtained from [`Self::allocate_id`]
    pub fn insert(&self, id: RecordId, record: V) {
        // Allocated ids are never reused, so the slot is always vacant.
        if self.map.insert_sync(id, record).is_err() {
            log::warn!("Record id {} already present, keeping the existing record", id);
        }
    }

    pub fn get(&self, id: RecordId) -> Option<V> {
        self.map.read_sync(&id, |_, v| v.clone())
    }

    /// Snapshot of every record in creation order
    pub fn values(&self) -> Vec<V> {
        let mut rows: Vec<(RecordId, V)> = Vec::with_capacity(self.map.len());
        self.map.retain_sync(|id, v| {
            rows.push((*id, v.clone()));
            true // Keep all items
        });
        rows.sort_unstable_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, v)| v).collect()
    }

    /// Records matching `predicate`, in creation order
    pub fn filter<P>(&self, mut predicate: P) -> Vec<V>
    where
        P: FnMut(&V) -> bool,
    {
        self.values().into_iter().filter(|v| predicate(v)).collect()
    }

    /// First record in creation order matching `predicate`
    pub fn find_first<P>(&self, mut predicate: P) -> Option<V>
    where
        P: FnMut(&V) -> bool,
    {
        self.values().into_iter().find(|v| predicate(v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V> Default for IdTable<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let table = IdTable::<String>::new();
        let a = table.create_with(|id| format!("row-{}", id));
        let b = table.create_with(|id| format!("row-{}", id));

        assert_eq!(a, "row-1");
        assert_eq!(b, "row-2");
        assert_eq!(table.get(2), Some("row-2".to_string()));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn test_allocation_advances_without_insert() {
        let table = IdTable::<u32>::new();
        assert_eq!(table.allocate_id(), 1);
        assert!(table.is_empty());
        let next = table.create_with(|id| id);
        assert_eq!(next, 2);
        assert!(!table.is_empty());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1), None);
    }

    #[test]
    fn test_values_follow_creation_order() {
        let table = IdTable::<u32>::new();
        for _ in 0..50 {
            table.create_with(|id| id * 10);
        }
        let values = table.values();
        assert_eq!(values.len(), 50);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values[0], 10);
    }

    #[test]
    fn test_filter_and_find_first() {
        let table = IdTable::<(u32, &'static str)>::new();
        table.create_with(|id| (id, "a"));
        table.create_with(|id| (id, "b"));
        table.create_with(|id| (id, "a"));

        let a_rows = table.filter(|(_, tag)| *tag == "a");
        assert_eq!(a_rows, vec![(1, "a"), (3, "a")]);
        assert_eq!(table.find_first(|(_, tag)| *tag == "a"), Some((1, "a")));
        assert_eq!(table.find_first(|(_, tag)| *tag == "z"), None);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let table = Arc::new(IdTable::<RecordId>::new());

        let mut handles = vec![];
        for _ in 0..100 {
            let table = table.clone();
            handles.push(tokio::spawn(async move { table.create_with(|id| id) }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(table.len(), 100);
        let ids = table.values();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
    }
}
