pub mod tradesim_client {

    use anyhow::Result;
    use derive_more::Display;
    use log::{debug, info};
    use reqwest::blocking::RequestBuilder;
    use reqwest::StatusCode;
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::config::ClientConfig;
    use crate::order::Order;
    use crate::pretty::pretty_json;

    /// Opaque identifier handed back by the server on a successful placement.
    #[derive(Clone, Debug, Display, Deserialize, Serialize, PartialEq, Eq, Hash)]
    #[serde(transparent)]
    pub struct OrderId(String);

    impl OrderId {
        pub fn new(id: impl Into<String>) -> Self {
            Self(id.into())
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }

        /// Reads `order_id` from a placement body. Strings are taken as-is, numbers keep their
        /// decimal text. Anything else, including an empty string or a zero, is no id.
        pub fn from_body(body: &Value) -> Option<Self> {
            match body.get("order_id")? {
                Value::String(id) if !id.is_empty() => Some(OrderId::new(id.as_str())),
                Value::Number(id) if id.as_f64() != Some(0.0) => Some(OrderId::new(id.to_string())),
                _ => None,
            }
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct Reply {
        pub status: StatusCode,
        pub body: Value,
    }

    impl Reply {
        pub fn new(status: StatusCode, text: &str) -> Self {
            Self {
                status,
                body: decode_body(text),
            }
        }
    }

    /// Bodies that aren't JSON are kept as a JSON string so they can still be logged.
    pub fn decode_body(text: &str) -> Value {
        if text.trim().is_empty() {
            return Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    }

    #[derive(Clone, Debug, PartialEq)]
    pub enum Outcome {
        Success(Reply),
        Failure(Reply),
    }

    impl Outcome {
        pub fn from_reply(reply: Reply, expected: StatusCode) -> Self {
            if reply.status == expected {
                Outcome::Success(reply)
            } else {
                Outcome::Failure(reply)
            }
        }

        pub fn is_success(&self) -> bool {
            matches!(self, Outcome::Success(_))
        }

        pub fn reply(&self) -> &Reply {
            match self {
                Outcome::Success(reply) | Outcome::Failure(reply) => reply,
            }
        }

        pub fn status(&self) -> StatusCode {
            self.reply().status
        }

        pub fn body(&self) -> &Value {
            &self.reply().body
        }
    }

    pub struct Client {
        config: ClientConfig,
        client: reqwest::blocking::Client,
    }

    impl Client {
        pub fn new(config: ClientConfig) -> Result<Self> {
            let mut builder = reqwest::blocking::Client::builder();
            if let Some(timeout) = config.timeout() {
                builder = builder.timeout(timeout);
            }
            Ok(Self {
                config,
                client: builder.build()?,
            })
        }

        pub fn config(&self) -> &ClientConfig {
            &self.config
        }

        fn target(&self) -> &str {
            self.config.log_target()
        }

        fn send(&self, request: RequestBuilder, expected: StatusCode) -> Result<Outcome> {
            let response = request.send()?;
            let status = response.status();
            let text = response.text()?;
            Ok(Outcome::from_reply(Reply::new(status, &text), expected))
        }

        fn log_response(&self, outcome: &Outcome) {
            info!(target: self.target(), "Response: {}", pretty_json(outcome.body()));
        }

        /// Places a freshly randomised order.
        pub fn place_order(&self) -> Result<Option<OrderId>> {
            let order = Order::random(&mut rand::thread_rng());
            self.submit_order(&order)
        }

        pub fn submit_order(&self, order: &Order) -> Result<Option<OrderId>> {
            let outcome = self.post_order(order)?;

            info!(target: self.target(), "Placing Order Test:");
            self.log_response(&outcome);

            if outcome.is_success() {
                info!(target: self.target(), "Order placed successfully!");
                Ok(OrderId::from_body(outcome.body()))
            } else {
                info!(target: self.target(), "Order placement failed.");
                Ok(None)
            }
        }

        pub fn post_order(&self, order: &Order) -> Result<Outcome> {
            let url = self.config.url("/place_order");
            debug!(
                target: self.target(),
                "POST {url} side={} quantity={} price={}",
                order.side.as_str(),
                order.quantity,
                order.price
            );
            self.send(self.client.post(url).json(order), StatusCode::CREATED)
        }

        pub fn check_order(&self, order_id: &OrderId) -> Result<Outcome> {
            let url = self.config.url("/check_order");
            debug!(target: self.target(), "GET {url}?order_id={order_id}");
            let outcome = self.send(
                self.client
                    .get(url)
                    .query(&[("order_id", order_id.as_str())]),
                StatusCode::OK,
            )?;

            info!(target: self.target(), "Checking Order Test:");
            self.log_response(&outcome);

            if outcome.is_success() {
                info!(target: self.target(), "Order check successful!");
            } else {
                info!(target: self.target(), "Order check failed.");
            }
            Ok(outcome)
        }

        pub fn order_depth(&self) -> Result<Outcome> {
            let url = self.config.url("/order_depth");
            debug!(target: self.target(), "GET {url}");
            let outcome = self.send(self.client.get(url), StatusCode::OK)?;

            info!(target: self.target(), "Order Depth Test:");
            self.log_response(&outcome);

            if outcome.is_success() {
                info!(target: self.target(), "Order depth check successful!");
            } else {
                info!(target: self.target(), "Order depth check failed.");
            }
            Ok(outcome)
        }

        pub fn last_traded_prices(&self) -> Result<Outcome> {
            let url = self.config.url("/last_traded_prices");
            debug!(target: self.target(), "GET {url}");
            let outcome = self.send(self.client.get(url), StatusCode::OK)?;

            // Body is only shown on success here.
            if outcome.is_success() {
                info!(target: self.target(), "Last Traded Prices Test: PASSED");
                self.log_response(&outcome);
            } else {
                info!(target: self.target(), "Last Traded Prices Test: FAILED");
            }
            Ok(outcome)
        }
    }
}
