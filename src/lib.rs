//! Synthetic exchange fixtures: order and transfer ids, timestamps inside a
//! historical window, and closed order records.
//!
//! Every generator takes the random source by `&mut`, so a seeded
//! [`rand_chacha::ChaCha8Rng`] gives reproducible output.

pub mod core;
pub mod generators;
pub mod models;
pub mod utils;


pub use crate::core::config::GeneratorConfig;
pub use crate::core::errors::FixtureError;
pub use generators::ClosedOrderGenerator;
pub use models::{ClosedOrder, ClosedOrders, OrderStatus};
