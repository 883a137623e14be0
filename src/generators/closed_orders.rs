use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use super::identifiers::order_id;
use crate::core::config::GeneratorConfig;
use crate::core::errors::FixtureError;
use crate::models::{ClosedOrder, ClosedOrders, OrderDescription, OrderStatus, TriggerType};
use crate::utils::uniform_between;

const ZERO_PRICE: &str = "0.00000";
const ORDER_FLAGS: &str = "fciq";

pub struct ClosedOrderGenerator {
    config: GeneratorConfig,
}

impl ClosedOrderGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, FixtureError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ClosedOrder {
        let config = &self.config;
        let window_end = config.window.end_secs();

        let open_time = uniform_between(rng, config.window.start_secs(), window_end);
        let close_time = uniform_between(rng, open_time, window_end);

        let price = uniform_between(rng, config.price.min, config.price.max);
        let volume = uniform_between(rng, config.volume.min, config.volume.max);
        let volume_executed = rng.gen_range(config.volume.min..=volume);
        let cost = price * volume_executed;
        let fee = config.fee_rate * cost;

        let decimals = rng.gen_range(config.precision.min..=config.precision.max);
        let to_decimal = |value: f64| format!("{:.*}", decimals, value);

        let status = *config
            .closed_statuses
            .choose(rng)
            .expect("closed statuses validated non-empty");
        let reason = (status == OrderStatus::Canceled).then(|| config.cancel_reason.clone());

        trace!(%status, decimals, price, volume_executed, "generated closed order");

        ClosedOrder {
            ref_id: None,
            userref: config.user_ref,
            status,
            reason,
            open_time,
            close_time,
            start_time: 0.0,
            expire_time: 0.0,
            description: OrderDescription::default(),
            volume: to_decimal(volume),
            volume_executed: to_decimal(volume_executed),
            cost: to_decimal(cost),
            fee: to_decimal(fee),
            price: to_decimal(price),
            stop_price: ZERO_PRICE.to_string(),
            limit_price: ZERO_PRICE.to_string(),
            misc: String::new(),
            order_flags: ORDER_FLAGS.to_string(),
            trigger: TriggerType::Index,
        }
    }

    /// `count` fresh records, each under a fresh order id.
    pub fn generate_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> ClosedOrders {
        let mut orders = ClosedOrders::default();
        for _ in 0..count {
            let id = order_id(rng);
            let order = self.generate(rng);
            orders.insert(id, order);
        }
        debug!(requested = count, generated = orders.count, "generated closed orders");
        orders
    }
}
