use super::{Order, Product};

/// Assembles an order step by step. Every step consumes and returns the
/// builder, and `build` consumes it for good, so a builder cannot be reused.
#[derive(Debug)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new(order_id: i64) -> Self {
        Self {
            order: Order::with_id(order_id, 0.0),
        }
    }

    pub fn add_product(mut self, product: Product) -> Self {
        self.order.add_product(product);
        self
    }

    pub fn calculate_total(mut self) -> Self {
        self.order.calculate_total();
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_order_with_products_and_total() {
        let order = OrderBuilder::new(0)
            .add_product(Product::new(1, "Product A", 10.5))
            .add_product(Product::new(2, "Product B", 20.0))
            .calculate_total()
            .build();

        assert_eq!(order.id, 0);
        assert_eq!(order.total_amount, 30.5);
        assert_eq!(order.products.len(), 2);
        assert_eq!(order.products[0].name, "Product A");
        assert_eq!(order.products[1].name, "Product B");
    }

    #[test]
    fn total_stays_at_zero_without_calculate_step() {
        let order = OrderBuilder::new(0)
            .add_product(Product::new(1, "Product A", 10.5))
            .build();

        assert_eq!(order.total_amount, 0.0);
    }

    #[test]
    fn keeps_the_supplied_order_id() {
        let order = OrderBuilder::new(42).build();

        assert_eq!(order.id, 42);
        assert!(order.products.is_empty());
    }
}
