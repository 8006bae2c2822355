use std::fmt::Debug;

/// A value that can be stored in a [`Repository`](crate::Repository).
///
/// The id `0` is reserved: it marks a record that has not been assigned an id
/// yet. Implement by hand or with `#[derive(Entity)]` and an `#[id]` field.
pub trait Entity: Clone + Debug + Send + 'static {
    /// The id the record is stored under, or `0` if unassigned.
    fn id(&self) -> u64;

    /// Overwrite the id. Called by stores when assigning a fresh id.
    fn set_id(&mut self, id: u64);

    fn is_new(&self) -> bool {
        self.id() == 0
    }
}
