use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::entity::Entity;
use crate::repository::Repository;
use crate::result::{StoreError, StoreResult};

/// Thread-safe in-memory [`Repository`].
///
/// The id map and the id counter live behind one lock, so every operation
/// sees both in a consistent state.
pub struct MemoryStore<T: Entity> {
    inner: Mutex<StoreInner<T>>,
}

struct StoreInner<T> {
    records: HashMap<u64, T>,
    /// Always greater than any id handed out, and than any explicitly saved id
    /// below `u64::MAX`.
    next_id: u64,
}

impl<T: Entity> MemoryStore<T> {
    /// Create an empty store. The first assigned id is `1`.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// No operation panics while holding the guard, so the data behind a
    /// poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, StoreInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for MemoryStore<T> {
    fn save(&self, mut record: T) -> StoreResult<u64> {
        let mut inner = self.lock();

        let id = if record.is_new() {
            let id = inner.next_id;
            inner.next_id = id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
            record.set_id(id);
            id
        } else {
            let id = record.id();
            // An explicit u64::MAX leaves the counter where it is.
            if let Some(after) = id.checked_add(1) {
                inner.next_id = inner.next_id.max(after);
            }
            id
        };

        inner.records.insert(id, record);
        info!(id, "saved record");

        Ok(id)
    }

    fn find_by_id(&self, id: u64) -> StoreResult<T> {
        let inner = self.lock();

        debug!(id, "looking up record");
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, record: T) -> StoreResult<()> {
        let mut inner = self.lock();
        let id = record.id();

        match inner.records.get_mut(&id) {
            Some(stored) => {
                *stored = record;
                info!(id, "updated record");
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::Product;

    #[test]
    fn store_save_and_find() {
        let store = MemoryStore::new();

        let id = store.save(Product::new("Laptop", 1200.0)).unwrap();
        let found = store.find_by_id(id).expect("Record not found");

        assert_eq!(id, 1);
        assert_eq!(
            found,
            Product {
                id: 1,
                name: "Laptop".to_owned(),
                price: 1200.0,
            }
        );
    }

    #[test]
    fn store_find_missing() {
        let store: MemoryStore<Product> = MemoryStore::new();

        assert!(matches!(
            store.find_by_id(99),
            Err(StoreError::NotFound(99))
        ));
    }

    #[test]
    fn store_update() {
        let store = MemoryStore::new();
        let id = store.save(Product::new("Laptop", 1200.0)).unwrap();

        let mut laptop = store.find_by_id(id).unwrap();
        laptop.name = "Gaming Laptop".to_owned();
        laptop.price = 1150.0;
        store.update(laptop).unwrap();

        let updated = store.find_by_id(id).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Gaming Laptop");
        assert_eq!(updated.price, 1150.0);
    }

    #[test]
    fn store_update_missing_leaves_contents() {
        let store = MemoryStore::new();
        let id = store.save(Product::new("Laptop", 1200.0)).unwrap();

        let ghost = Product {
            id: 42,
            name: "Ghost".to_owned(),
            price: 1.0,
        };
        assert!(matches!(store.update(ghost), Err(StoreError::NotFound(42))));

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(id).unwrap().name, "Laptop");
        assert!(store.find_by_id(42).is_err());
    }

    #[test]
    fn store_ids_are_monotonic() {
        let store = MemoryStore::new();

        let ids: Vec<u64> = (0..5)
            .map(|i| store.save(Product::new(format!("item{i}"), 1.0)).unwrap())
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn store_explicit_id_upserts() {
        let store = MemoryStore::new();

        let explicit = Product {
            id: 10,
            name: "Monitor".to_owned(),
            price: 300.0,
        };
        assert_eq!(store.save(explicit.clone()).unwrap(), 10);
        assert_eq!(store.find_by_id(10).unwrap(), explicit);

        // Saving again under the same id overwrites.
        let cheaper = Product {
            price: 250.0,
            ..explicit
        };
        store.save(cheaper).unwrap();
        assert_eq!(store.find_by_id(10).unwrap().price, 250.0);
        assert_eq!(store.len(), 1);

        // Assigned ids never collide with explicit ones.
        assert_eq!(store.save(Product::new("Keyboard", 50.0)).unwrap(), 11);
    }

    #[test]
    fn store_explicit_id_at_upper_bound() {
        let store = MemoryStore::new();

        let last = Product {
            id: u64::MAX,
            name: "Edge".to_owned(),
            price: 0.0,
        };
        assert_eq!(store.save(last).unwrap(), u64::MAX);

        let a = store.save(Product::new("A", 1.0)).unwrap();
        let b = store.save(Product::new("B", 2.0)).unwrap();

        assert_eq!((a, b), (1, 2));
        assert_eq!(store.find_by_id(u64::MAX).unwrap().name, "Edge");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn store_counter_exhaustion_is_an_error() {
        let store = MemoryStore::new();
        store.lock().next_id = u64::MAX;

        assert!(matches!(
            store.save(Product::new("Last", 1.0)),
            Err(StoreError::IdsExhausted)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn store_concurrent_saves_get_unique_ids() {
        let store: Arc<dyn Repository<Product>> = Arc::new(MemoryStore::<Product>::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| {
                            store
                                .save(Product::new(format!("t{t}-{i}"), i as f64))
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        let unique: HashSet<u64> = ids.iter().copied().collect();

        assert_eq!(ids.len(), 400);
        assert_eq!(unique.len(), 400);
        assert!(!unique.contains(&0));
    }

    #[test]
    fn store_returns_copies() {
        let store = MemoryStore::new();
        let id = store.save(Product::new("Laptop", 1200.0)).unwrap();

        let mut copy = store.find_by_id(id).unwrap();
        copy.price = 1.0;

        assert_eq!(store.find_by_id(id).unwrap().price, 1200.0);
    }
}
