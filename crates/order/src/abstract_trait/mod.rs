mod command;
mod notifier;
mod repository;

pub use self::command::{CommandHandlerTrait, DynCommandHandler};
pub use self::notifier::{DynOrderNotifier, OrderNotifierTrait};
pub use self::repository::{DynOrderRepository, OrderRepositoryTrait};
