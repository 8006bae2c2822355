use crate::entity::Entity;
use crate::result::StoreResult;

/// Capability set every record store provides.
///
/// Callers should hold a `dyn Repository<T>` so backends can be swapped
/// without touching calling code.
pub trait Repository<T: Entity>: Send + Sync {
    /// Store a copy of `record`.
    ///
    /// A record with id `0` is assigned the next free id. A nonzero id is
    /// inserted or overwritten as is.
    ///
    /// # Returns
    ///
    /// The id the record was stored under.
    fn save(&self, record: T) -> StoreResult<u64>;

    /// Fetch a copy of the record stored under `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) if no such record exists.
    fn find_by_id(&self, id: u64) -> StoreResult<T>;

    /// Replace the record stored under `record.id()`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) if no such record
    /// exists. The store is left untouched in that case.
    fn update(&self, record: T) -> StoreResult<()>;
}
