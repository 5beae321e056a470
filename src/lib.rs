//! A small Rust client for the [Data.gov.sg](https://data.gov.sg) real-time APIs.
//!
//! Every dataset (weather forecasts, PSI, rainfall, traffic cameras, ...) is a
//! single GET against a fixed path, decoded into a typed record. Optional
//! filters are passed as [`QueryOption`]s.
//!
//! ## Quick start
//! ```no_run
//! use datagovsg::{Client, QueryOption};
//!
//! fn main() -> anyhow::Result<()> {
//!     let client = Client::new()?;
//!     let psi = client.psi(&[QueryOption::date("2020-01-01")])?;
//!     for item in &psi.items {
//!         println!("{}: {:?}", item.timestamp, item.readings.psi_twenty_four_hourly);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The base URL defaults to `https://api.data.gov.sg`. It can only be changed
//! on the handle itself, with [`Client::with_base_url`] or
//! [`Client::set_base_url`].

#![forbid(unsafe_code)]

mod client;
pub mod environment;
mod error;
pub mod models;
mod query;
pub mod transport;
mod util;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use query::{QueryOption, to_query_string};
