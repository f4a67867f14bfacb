use serde::{Deserialize, Serialize};

use super::Product;

/// An order header together with its products, treated as one consistency
/// unit. `id` stays 0 until the storage layer assigns one at first save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub total_amount: f64,
    pub products: Vec<Product>,
}

impl Order {
    /// An order that has not been persisted yet.
    pub fn new(total_amount: f64) -> Self {
        Self::with_id(0, total_amount)
    }

    pub fn with_id(id: i64, total_amount: f64) -> Self {
        Self {
            id,
            total_amount,
            products: Vec::new(),
        }
    }

    /// Appends to the end of the product sequence. `total_amount` is left
    /// untouched; recomputation only happens through
    /// [`calculate_total`](Self::calculate_total).
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Replaces `total_amount` with the sum of the current products' prices.
    pub fn calculate_total(&mut self) {
        self.total_amount = self.products.iter().map(|p| p.price).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_product_appends_in_order() {
        let mut order = Order::new(0.0);
        order.add_product(Product::new(1, "Keyboard", 49.0));
        order.add_product(Product::new(2, "Mouse", 19.0));

        let names: Vec<&str> = order.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Keyboard", "Mouse"]);
    }

    #[test]
    fn add_product_does_not_touch_total() {
        let mut order = Order::new(100.0);
        order.add_product(Product::new(1, "Keyboard", 49.0));

        assert_eq!(order.total_amount, 100.0);
    }

    #[test]
    fn calculate_total_sums_current_products() {
        let mut order = Order::new(0.0);
        order.add_product(Product::new(1, "Keyboard", 10.5));
        order.add_product(Product::new(2, "Mouse", 20.0));
        order.calculate_total();

        assert_eq!(order.total_amount, 30.5);
    }

    #[test]
    fn calculate_total_of_empty_order_is_zero() {
        let mut order = Order::new(55.0);
        order.calculate_total();

        assert_eq!(order.total_amount, 0.0);
    }
}
