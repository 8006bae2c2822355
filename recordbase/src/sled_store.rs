use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::{Config, Db, Tree};
use tracing::{debug, info};

use crate::encoding::{decode, encode};
use crate::entity::Entity;
use crate::repository::Repository;
use crate::result::{StoreError, StoreResult};

/// Records a [`SledStore`] can hold.
pub trait SledEntity: Entity + Serialize + DeserializeOwned {}
impl<T: Entity + Serialize + DeserializeOwned> SledEntity for T {}

/// [`Repository`] backed by a temporary sled database.
///
/// The database is removed when the store is dropped, so nothing outlives the
/// process. Records are bincode encoded and keyed by their big-endian id.
pub struct SledStore<T: SledEntity> {
    /// Keeps the temporary database alive for as long as the store.
    _engine: Db,
    root: Tree,
    /// Held for the whole of every operation. Holds the next id to assign.
    next_id: Mutex<u64>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: SledEntity> SledStore<T> {
    /// Open a store on a fresh temporary database.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the sled tree holding the records.
    pub fn temporary(name: &str) -> StoreResult<Self> {
        let engine = Config::new().temporary(true).open()?;
        Self::with_engine(engine, name)
    }

    /// Open a store on a tree of an already open database.
    ///
    /// Existing records in the tree are kept and the id counter resumes after
    /// the highest stored id.
    pub fn with_engine(engine: Db, name: &str) -> StoreResult<Self> {
        let root = engine.open_tree(name)?;

        let next_id = resume_id(&root)?;

        debug!(tree = name, next_id, "opened sled store");
        Ok(Self {
            _engine: engine,
            root,
            next_id: Mutex::new(next_id),
            _marker: PhantomData,
        })
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, u64> {
        self.next_id.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One past the highest stored id below `u64::MAX`, so a record saved under
/// `u64::MAX` never pins the counter.
fn resume_id(root: &Tree) -> StoreResult<u64> {
    match root.range(..encode(&u64::MAX)?).next_back() {
        Some(entry) => Ok(decode::<u64>(&entry?.0)? + 1),
        None => Ok(1),
    }
}

impl<T: SledEntity> Repository<T> for SledStore<T> {
    fn save(&self, mut record: T) -> StoreResult<u64> {
        let mut next_id = self.lock();

        let (id, advanced) = if record.is_new() {
            let id = *next_id;
            (id, id.checked_add(1).ok_or(StoreError::IdsExhausted)?)
        } else {
            let id = record.id();
            (id, id.checked_add(1).map_or(*next_id, |after| (*next_id).max(after)))
        };
        record.set_id(id);

        self.root.insert(encode(&id)?, encode(&record)?)?;
        *next_id = advanced;
        info!(id, "saved record");

        Ok(id)
    }

    fn find_by_id(&self, id: u64) -> StoreResult<T> {
        let _guard = self.lock();

        debug!(id, "looking up record");
        match self.root.get(encode(&id)?)? {
            Some(serialized) => decode(&serialized),
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn update(&self, record: T) -> StoreResult<()> {
        let _guard = self.lock();
        let id = record.id();
        let serialized = encode(&record)?;

        // Only replaces an existing value, an absent key stays absent.
        let previous = self
            .root
            .fetch_and_update(encode(&id)?, |old| old.map(|_| serialized.clone()))?;

        if previous.is_none() {
            return Err(StoreError::NotFound(id));
        }

        info!(id, "updated record");
        Ok(())
    }
}
