//! [EnergyZero](https://www.energyzero.nl) day-ahead electricity prices client.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use energyzero::Client;
//!
//! # fn main() -> anyhow::Result<()> {
//! let client = Client::default();
//! let on = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
//! let cheapest = client.valley_hours(on, on, 3, None)?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
mod prelude;
pub mod report;
pub mod window;

pub use self::{
    api::{
        client::Client,
        transport::{HttpRequest, HttpResponse, Transport, TransportError, UreqTransport},
    },
    config::Config,
    error::Error,
    report::{PriceEntry, PricePoint, PriceReport},
    window::QueryWindow,
};
