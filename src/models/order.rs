use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Open,
    Closed,
    Canceled,
    Expired,
}

impl OrderStatus {
    pub const CLOSED: [OrderStatus; 3] = [
        OrderStatus::Canceled,
        OrderStatus::Closed,
        OrderStatus::Expired,
    ];

    /// True for the statuses an order can end its life in.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Closed | OrderStatus::Canceled | OrderStatus::Expired
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Open => write!(f, "open"),
            OrderStatus::Closed => write!(f, "closed"),
            OrderStatus::Canceled => write!(f, "canceled"),
            OrderStatus::Expired => write!(f, "expired"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Index,
    Last,
}

/// Always serialized as an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDescription {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedOrder {
    #[serde(rename = "refid")]
    pub ref_id: Option<String>,
    pub userref: i64,
    pub status: OrderStatus,
    pub reason: Option<String>,
    #[serde(rename = "opentm")]
    pub open_time: f64,
    #[serde(rename = "closetm")]
    pub close_time: f64,
    #[serde(rename = "starttm")]
    pub start_time: f64,
    #[serde(rename = "expiretm")]
    pub expire_time: f64,
    #[serde(rename = "descr")]
    pub description: OrderDescription,
    #[serde(rename = "vol")]
    pub volume: String,
    #[serde(rename = "vol_exec")]
    pub volume_executed: String,
    pub cost: String,
    pub fee: String,
    pub price: String,
    #[serde(rename = "stopprice")]
    pub stop_price: String,
    #[serde(rename = "limitprice")]
    pub limit_price: String,
    pub misc: String,
    #[serde(rename = "oflags")]
    pub order_flags: String,
    pub trigger: TriggerType,
}

impl ClosedOrder {
    /// Number of digits after the decimal point shared by the numeric fields.
    pub fn precision(&self) -> usize {
        self.price
            .split_once('.')
            .map(|(_, frac)| frac.len())
            .unwrap_or(0)
    }
}

/// Closed orders keyed by order id, in the shape the exchange returns them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosedOrders {
    pub closed: BTreeMap<String, ClosedOrder>,
    pub count: usize,
}

impl ClosedOrders {
    pub fn insert(&mut self, id: String, order: ClosedOrder) {
        self.closed.insert(id, order);
        self.count = self.closed.len();
    }
}
