use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use energyzero::{Config, config::DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[clap(flatten)]
    pub client: ClientArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser)]
pub struct ClientArgs {
    #[clap(long = "base-url", env = "ENERGYZERO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[clap(long, env = "ENERGYZERO_TIMEOUT", default_value = "10s")]
    pub timeout: humantime::Duration,

    /// Include VAT (BTW) in the prices.
    #[clap(
        long,
        global = true,
        env = "ENERGYZERO_VAT",
        default_value = "true",
        action = ArgAction::Set,
    )]
    pub vat: bool,
}

impl ClientArgs {
    pub fn config(&self) -> Config {
        Config::builder()
            .base_url(self.base_url.clone())
            .timeout(*self.timeout)
            .vat(self.vat)
            .build()
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print all prices in the period.
    Prices {
        #[clap(flatten)]
        period: PeriodArgs,

        /// Bucket code: 4 for hours, 5 for days, 6 for months, 9 for weeks.
        #[clap(long, default_value = "4")]
        interval: u8,
    },

    /// Print the average price in the period.
    Average(PeriodArgs),

    /// Print the lowest price in the period.
    Lowest(PeriodArgs),

    /// Print the highest price in the period.
    Highest(PeriodArgs),

    /// Print the prices above the threshold.
    Above(ThresholdArgs),

    /// Print the prices below the threshold.
    Below(ThresholdArgs),

    /// Print the most expensive hours.
    Peak(TopArgs),

    /// Print the cheapest hours.
    Valley(TopArgs),
}

#[derive(Copy, Clone, Parser)]
pub struct PeriodArgs {
    /// First date, today by default.
    #[clap(long)]
    pub start: Option<NaiveDate>,

    /// Last date (inclusive), the start date by default.
    #[clap(long)]
    pub end: Option<NaiveDate>,
}

impl PeriodArgs {
    pub fn dates(self) -> (NaiveDate, NaiveDate) {
        let start = self.start.unwrap_or_else(|| Local::now().date_naive());
        (start, self.end.unwrap_or(start))
    }
}

#[derive(Copy, Clone, Parser)]
pub struct ThresholdArgs {
    #[clap(flatten)]
    pub period: PeriodArgs,

    /// Price in euro per kilowatt-hour.
    #[clap(allow_negative_numbers = true)]
    pub threshold: f64,
}

#[derive(Copy, Clone, Parser)]
pub struct TopArgs {
    #[clap(flatten)]
    pub period: PeriodArgs,

    #[clap(long, default_value = "5")]
    pub top: usize,
}
