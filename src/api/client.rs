use chrono::{Local, NaiveDate, TimeZone};
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::{
    api::transport::{HttpRequest, Transport, UreqTransport},
    config::Config,
    error::Error,
    prelude::*,
    report::{PriceEntry, PricePoint, PriceReport},
    window::{DEFAULT_INTERVAL, QueryWindow},
};

const ACCEPT: &str = "application/json, text/plain";

/// EnergyZero API client.
///
/// Dates are interpreted in `Tz`, which is the local timezone unless overridden
/// with [`Client::with_timezone`].
pub struct Client<T = UreqTransport, Tz = Local> {
    config: Config,
    transport: T,
    timezone: Tz,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, UreqTransport::default())
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport, timezone: Local }
    }
}

impl<T: Transport, Tz: TimeZone> Client<T, Tz> {
    pub fn with_timezone<Tz2: TimeZone>(self, timezone: Tz2) -> Client<T, Tz2> {
        Client { config: self.config, transport: self.transport, timezone }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Call the endpoint and decode the JSON body.
    ///
    /// Transport failures, including HTTP error statuses, are logged and
    /// result in `None`. Any other status than `200 OK` is an [`Error::UnexpectedStatus`].
    #[instrument(skip_all, fields(path = path))]
    pub fn request(&self, path: &str, query: &impl Serialize) -> Result<Option<Value>> {
        let query = serde_qs::to_string(query).context("failed to encode the query")?;
        let mut url = self.config.endpoint_url(path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        debug!(url = %url, "requesting…");

        let request = HttpRequest {
            url: &url,
            headers: vec![("Accept", ACCEPT), ("User-Agent", self.config.user_agent.as_str())],
            timeout: self.config.timeout,
        };
        let response = match self.transport.get(&request) {
            Ok(response) => response,
            Err(error) => {
                warn!(url = %url, "request failed: {error:#}");
                return Ok(None);
            }
        };

        let status = response.status;
        if status.is_client_error() || status.is_server_error() {
            warn!(url = %url, %status, "request failed");
            return Ok(None);
        }
        if status != StatusCode::OK {
            bail!(Error::UnexpectedStatus { status });
        }
        let value = serde_json::from_str(&response.body)
            .with_context(|| format!("failed to deserialize the response from `{url}`"))?;
        Ok(Some(value))
    }

    /// Fetch the prices between the start of `start` and the end of `end`.
    ///
    /// `vat` falls back to [`Config::vat`].
    #[instrument(skip_all, fields(start = %start, end = %end, interval = interval))]
    pub fn energy_prices(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        interval: u8,
        vat: Option<bool>,
    ) -> Result<PriceReport> {
        let window = QueryWindow::try_new(
            start,
            end,
            interval,
            vat.unwrap_or(self.config.vat),
            &self.timezone,
        )?;
        // Without an object there is no `Prices` field either.
        let Some(value @ Value::Object(_)) = self.request("energyprices", &window)? else {
            bail!(Error::NoData);
        };
        let report: PriceReport =
            serde_json::from_value(value).context("failed to deserialize the energy prices")?;
        if report.prices.is_empty() {
            bail!(Error::NoData);
        }
        info!(n_prices = report.prices.len(), "fetched");
        Ok(report)
    }

    fn hourly_prices(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        vat: Option<bool>,
    ) -> Result<PriceReport> {
        self.energy_prices(start, end, DEFAULT_INTERVAL, vat)
    }

    /// Server-computed average price.
    pub fn average_price_for_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        vat: Option<bool>,
    ) -> Result<f64> {
        self.hourly_prices(start, end, vat)?
            .average
            .context("the response contains no average price")
    }

    pub fn lowest_price_for_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        vat: Option<bool>,
    ) -> Result<PricePoint> {
        Ok(self.hourly_prices(start, end, vat)?.lowest().ok_or(Error::NoData)?)
    }

    pub fn highest_price_for_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        vat: Option<bool>,
    ) -> Result<PricePoint> {
        Ok(self.hourly_prices(start, end, vat)?.highest().ok_or(Error::NoData)?)
    }

    /// Prices strictly above the threshold, possibly none.
    pub fn prices_above_threshold(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        threshold: f64,
        vat: Option<bool>,
    ) -> Result<Vec<PriceEntry>> {
        Ok(self.hourly_prices(start, end, vat)?.above(threshold))
    }

    /// Prices strictly below the threshold, possibly none.
    pub fn prices_below_threshold(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        threshold: f64,
        vat: Option<bool>,
    ) -> Result<Vec<PriceEntry>> {
        Ok(self.hourly_prices(start, end, vat)?.below(threshold))
    }

    pub fn peak_hours(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        top_n: usize,
        vat: Option<bool>,
    ) -> Result<Vec<PriceEntry>> {
        Ok(self.hourly_prices(start, end, vat)?.peak(top_n))
    }

    pub fn valley_hours(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        top_n: usize,
        vat: Option<bool>,
    ) -> Result<Vec<PriceEntry>> {
        Ok(self.hourly_prices(start, end, vat)?.valley(top_n))
    }
}
