//! A tiny keyed record store.
//!
//! Records implement [`Entity`] and live behind the [`Repository`] trait.
//! [`MemoryStore`] keeps them in a locked map, [`SledStore`] keeps them in a
//! temporary sled database.
//!
//! ```
//! use recordbase::{MemoryStore, Product, Repository};
//!
//! let repo: Box<dyn Repository<Product>> = Box::new(MemoryStore::<Product>::new());
//!
//! let id = repo.save(Product::new("Laptop", 1200.0)).unwrap();
//! assert_eq!(repo.find_by_id(id).unwrap().name, "Laptop");
//! ```

pub mod entity;
pub use entity::Entity;

#[cfg(feature = "derive")]
pub use recordbase_derive::Entity;

pub mod record;
pub use record::Product;

pub mod repository;
pub use repository::Repository;

pub mod memory;
pub use memory::MemoryStore;

pub mod sled_store;
pub use sled_store::SledStore;

pub mod result;
pub use result::{StoreError, StoreResult};

pub mod logging;

mod encoding;
