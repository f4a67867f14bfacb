use crate::domain::Order;
use std::sync::Arc;

pub type DynOrderNotifier = Arc<dyn OrderNotifierTrait + Send + Sync>;

/// Informed by the caller after an operation succeeds. Fire-and-forget: the
/// repository never consults a notifier and no return value is inspected.
pub trait OrderNotifierTrait {
    fn notify_order_saved(&self, order: &Order);
    fn notify_order_updated(&self, order: &Order);
    fn notify_order_deleted(&self, order_id: i64);
}
