mod builder;
mod order;
mod product;

pub use self::builder::OrderBuilder;
pub use self::order::Order;
pub use self::product::Product;
