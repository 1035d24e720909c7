use serde::{Deserialize, Serialize};

/// A catalogue entry returned by the multi-value endpoints.
///
/// `price` and `quantity` are never negative in the seeded catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl Product {
    /// Create a product record.
    pub fn new(id: i32, name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let product = Product::new(2, "Mouse", 29.99, 50);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 2, "name": "Mouse", "price": 29.99, "quantity": 50})
        );
    }

    #[test]
    fn test_equality_is_field_wise() {
        let a = Product::new(1, "Laptop", 999.99, 5);
        assert_eq!(a, a.clone());
        assert_ne!(a, Product::new(1, "Laptop", 999.99, 4));
    }
}
