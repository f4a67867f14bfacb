use crate::{abstract_trait::OrderNotifierTrait, domain::Order};
use tracing::{info, warn};

/// Log-backed notifier. Payloads are serialized so a downstream transport
/// can pick them up unchanged.
#[derive(Debug, Default)]
pub struct OrderNotifier;

impl OrderNotifier {
    pub fn new() -> Self {
        Self
    }

    fn payload(order: &Order) -> String {
        serde_json::to_string(order).unwrap_or_else(|err| {
            warn!("Failed to serialize order {}: {err}", order.id);
            format!("{{\"id\":{}}}", order.id)
        })
    }
}

impl OrderNotifierTrait for OrderNotifier {
    fn notify_order_saved(&self, order: &Order) {
        info!(
            "📣 Order {} saved with total {}: {}",
            order.id,
            order.total_amount,
            Self::payload(order)
        );
    }

    fn notify_order_updated(&self, order: &Order) {
        info!(
            "📣 Order {} updated with total {}: {}",
            order.id,
            order.total_amount,
            Self::payload(order)
        );
    }

    fn notify_order_deleted(&self, order_id: i64) {
        info!("📣 Order {order_id} deleted");
    }
}
