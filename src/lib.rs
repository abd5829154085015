//! # tradesim-client
//!
//! A small synchronous client for a hosted trading simulation. The simulation itself (matching,
//! the order book, persistence) lives on the server; this crate only sends requests and logs what
//! comes back.
//!
//! One run, driven by [session::run], does the following:
//! - places a random [Order](crate::order::Order) with `POST /place_order`,
//! - if the server answered `201` with an `order_id`, checks it with `GET /check_order`,
//! - logs a separator line,
//! - optionally queries `GET /order_depth` and `GET /last_traded_prices`.
//!
//! Every response body is logged as sorted, indented JSON. A status other than the expected one
//! is a logged failure and is returned as an
//! [Outcome](crate::http::tradesim::tradesim_client::Outcome). Transport errors are returned as
//! errors and, in the binary, end the run.
//!
//! ```text
//! cargo run --bin tradesim_client -- [--alt] [--base-url URL] [--order-depth] [--last-traded-prices]
//! ```
pub mod config;
pub mod http;
pub mod logging;
pub mod order;
pub mod pretty;
pub mod session;
