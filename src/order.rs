use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;
pub const MIN_PRICE: f64 = 90.0;
pub const MAX_PRICE: f64 = 150.0;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

/// Payload sent to `/place_order`. Nothing is checked locally, the server owns validation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Order {
    pub side: Side,
    pub quantity: u32,
    pub price: f64,
}

impl Order {
    pub fn new(side: Side, quantity: u32, price: f64) -> Self {
        Self {
            side,
            quantity,
            price,
        }
    }

    pub fn buy(quantity: u32, price: f64) -> Self {
        Order::new(Side::Buy, quantity, price)
    }

    pub fn sell(quantity: u32, price: f64) -> Self {
        Order::new(Side::Sell, quantity, price)
    }

    /// Side is a coin flip, quantity is drawn from [1, 10] and price from [90, 150] rounded to
    /// cents.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let quantity_dist = Uniform::new_inclusive(MIN_QUANTITY, MAX_QUANTITY);
        let price_dist = Uniform::new_inclusive(MIN_PRICE, MAX_PRICE);

        let side = if rng.gen_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        };
        let quantity = quantity_dist.sample(rng);
        let price = round_price(price_dist.sample(rng));

        Order::new(side, quantity, price)
    }
}

pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
