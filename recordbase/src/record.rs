use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// A product record. Identity is `id`, every other field is mutable through
/// [`Repository::update`](crate::Repository::update).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique ID of a product, `0` until a store assigns one.
    pub id: u64,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Create an unsaved product.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
        }
    }
}

impl Entity for Product {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_is_unsaved() {
        let laptop = Product::new("Laptop", 1200.0);

        assert!(laptop.is_new());
        assert_eq!(laptop.name, "Laptop");
    }

    #[test]
    fn product_serializes_all_fields() {
        let product = Product {
            id: 1,
            name: "Laptop".to_owned(),
            price: 1150.0,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Laptop", "price": 1150.0 })
        );
    }
}
