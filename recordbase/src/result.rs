use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record not found with id {0}")]
    NotFound(u64),
    #[error("no ids left to assign")]
    IdsExhausted,
    #[error("sled error")]
    Sled(#[from] sled::Error),
    #[error("serializer error")]
    Serializer(#[from] bincode::Error),
}

impl StoreError {
    /// Returns `true` when the error reports a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
