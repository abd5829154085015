use anyhow::Result;
use log::info;

use crate::http::tradesim::tradesim_client::{Client, OrderId};

pub const SEPARATOR: &str = "=-=-=-=-=-=-=-=-=-=";

/// Optional probes run after the place/check pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Probes {
    pub order_depth: bool,
    pub last_traded_prices: bool,
}

impl Probes {
    pub fn all() -> Self {
        Self {
            order_depth: true,
            last_traded_prices: true,
        }
    }
}

/// Places one random order and checks it when the server handed back an id. Status failures are
/// only logged, transport errors end the run.
pub fn run(client: &Client, probes: &Probes) -> Result<Option<OrderId>> {
    let order_id = client.place_order()?;
    if let Some(order_id) = &order_id {
        client.check_order(order_id)?;
    }
    info!(target: client.config().log_target(), "{}", SEPARATOR);

    if probes.order_depth {
        client.order_depth()?;
    }
    if probes.last_traded_prices {
        client.last_traded_prices()?;
    }
    Ok(order_id)
}
