pub mod order;

pub use self::order::SqliteOrderRepository;
