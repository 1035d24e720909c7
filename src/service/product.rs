//! Multi-value product queries over a fixed catalogue.

use std::sync::Arc;

use crate::model::Product;
use crate::reactive::Flux;

/// Serves the seeded product catalogue.
#[derive(Debug, Clone)]
pub struct ProductService {
    products: Arc<[Product]>,
}

impl ProductService {
    /// Create a service over the default five-item catalogue.
    pub fn new() -> Self {
        Self::with_products(vec![
            Product::new(1, "Laptop", 999.99, 5),
            Product::new(2, "Mouse", 29.99, 50),
            Product::new(3, "Keyboard", 79.99, 30),
            Product::new(4, "Monitor", 299.99, 10),
            Product::new(5, "Headphones", 149.99, 25),
        ])
    }

    /// Create a service over an arbitrary catalogue.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Every product, in catalogue order.
    pub fn get_all_products(&self) -> Flux<Product> {
        let products = Arc::clone(&self.products);
        Flux::from_iter((0..products.len()).map(move |i| products[i].clone()))
    }

    /// Products priced at or below `max_price`.
    pub fn get_products_by_max_price(&self, max_price: f64) -> Flux<Product> {
        self.get_all_products()
            .filter(move |product| product.price <= max_price)
    }

    /// Products whose quantity is strictly below `threshold`.
    pub fn get_low_stock_products(&self, threshold: i32) -> Flux<Product> {
        self.get_all_products()
            .filter(move |product| product.quantity < threshold)
    }

    /// Product names, one per catalogue entry.
    pub fn get_product_names(&self) -> Flux<String> {
        self.get_all_products().map(|product| product.name)
    }

    /// Products priced up to 100 followed by those up to 500, without repeats.
    pub fn get_combined_products(&self) -> Flux<Product> {
        self.get_products_by_max_price(100.0)
            .concat(self.get_products_by_max_price(500.0))
            .distinct()
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}
