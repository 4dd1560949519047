//! # Shopby Core
//!
//! Typed client for the shopby (NHN Commerce) server API.
//!
//! ## Overview
//!
//! - **KST codec**: every date/time the API exchanges is Korea Standard Time;
//!   [`KstDateTime`] and [`KstDate`] normalize the API's mixed textual formats
//!   on the way in and render the single accepted format on the way out
//! - **Transport abstraction** with a reqwest implementation and a scripted
//!   fake for offline tests
//! - **Domain clients** for products, orders, members and display events
//! - **Structured errors** that keep status, URL and body of failed calls
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`kst`] | KST date/time codec |
//! | [`error`] | Error types |
//! | [`config`] | Environment-driven settings |
//! | [`http_client`] | HTTP client abstraction |
//! | [`client`] | Authenticated base client and query builder |
//! | [`clients`] | Products, order, member and display clients |
//! | [`models`] | Request and response types |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopby_core::{OrderClient, OrderSearchParams, ServerApiClient, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load()?;
//!     let orders = OrderClient::new(ServerApiClient::from_settings(&settings));
//!
//!     let params = OrderSearchParams {
//!         page_size: Some(10),
//!         ..OrderSearchParams::default()
//!     };
//!     let response = orders.get_orders(&params).await?;
//!     for order in &response.contents {
//!         println!("{:?} at {:?}", order.order_no, order.order_ymdt.map(|t| t.format()));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use shopby_core::{ShopbyError, ShopbyErrorKind};
//!
//! fn handle_error(error: ShopbyError) {
//!     match error.kind() {
//!         ShopbyErrorKind::Status if error.retryable() => {
//!             // 429 or 5xx: try again later
//!         }
//!         ShopbyErrorKind::Decode => {
//!             // response did not match the expected schema
//!         }
//!         _ => {}
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - Credentials are read from environment variables and never logged
//! - `Debug` output of settings and clients redacts the token and system key

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod http_client;
pub mod kst;
pub mod models;

// Codec
pub use kst::{to_kst_string, KstDate, KstDateTime, Timestamp, KST};

// Error types
pub use error::{ConfigError, ParseEnumError, ShopbyError, ShopbyErrorKind, TemporalError};

// Configuration
pub use config::{Environment, Settings};

// HTTP client types
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
    ScriptedHttpClient,
};

// Base client
pub use client::{QueryParams, ServerApiClient};

// Domain clients
pub use clients::{DisplayClient, MemberClient, OrderClient, ProductsClient, ShopbyClients};

// Request parameter types
pub use models::member::{MemberRef, MemberSearchParams};
pub use models::order::OrderSearchParams;
pub use models::products::{ChangedProductsParams, PatchProductV2Request, ProductSearchParams};
