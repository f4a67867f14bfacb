mod handler;

pub use self::handler::CommandHandler;

use crate::model::order::Order as OrderModel;

#[derive(Debug, Clone, PartialEq)]
pub struct SaveOrder {
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetOrderById {
    pub order_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOrder {
    pub order_id: i64,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOrder {
    pub order_id: i64,
}

/// One header-row storage operation, handed to the handler exactly once. The
/// result comes back by value as a [`CommandOutcome`] instead of being
/// written onto the command.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    Save(SaveOrder),
    GetById(GetOrderById),
    Update(UpdateOrder),
    Delete(DeleteOrder),
}

impl OrderCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Save(_) => "SaveOrder",
            Self::GetById(_) => "GetOrderById",
            Self::Update(_) => "UpdateOrder",
            Self::Delete(_) => "DeleteOrder",
        }
    }
}

/// What a dispatched command produced. Mutating commands report how many
/// header rows they touched so the dispatcher can decide on not-found.
#[derive(Debug)]
pub enum CommandOutcome {
    Saved { order_id: i64 },
    Fetched { order: Option<OrderModel> },
    Updated { rows_affected: u64 },
    Deleted { rows_affected: u64 },
}

impl CommandOutcome {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Saved { .. } => "Saved",
            Self::Fetched { .. } => "Fetched",
            Self::Updated { .. } => "Updated",
            Self::Deleted { .. } => "Deleted",
        }
    }
}
