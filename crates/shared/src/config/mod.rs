mod database;
mod myconfig;

pub use self::database::{ConnectionManager, StoreConnection};
pub use self::myconfig::Config;
