mod closed_orders;
mod identifiers;
mod timestamps;

pub use closed_orders::ClosedOrderGenerator;
pub use identifiers::{order_id, order_ids, transfer_id, transfer_ids};
pub use timestamps::{random_timestamp, random_timestamp_secs, random_timestamps};
