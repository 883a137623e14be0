mod order;

pub use order::{ClosedOrder, ClosedOrders, OrderDescription, OrderStatus, TriggerType};
