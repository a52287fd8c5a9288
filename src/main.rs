#![allow(clippy::doc_markdown)]

mod cli;
mod tables;

use anyhow::Result;
use clap::{Parser, crate_version};
use energyzero::{Client, PriceEntry};
use tracing::info;

use crate::{
    cli::{Args, Command},
    tables::build_prices_table,
};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let client = Client::new(args.client.config());

    match args.command {
        Command::Prices { period, interval } => {
            let (start, end) = period.dates();
            let report = client.energy_prices(start, end, interval, None)?;
            print_prices(&report.prices, report.average);
        }
        Command::Average(period) => {
            let (start, end) = period.dates();
            let average = client.average_price_for_period(start, end, None)?;
            info!(average, "average price");
        }
        Command::Lowest(period) => {
            let (start, end) = period.dates();
            let lowest = client.lowest_price_for_period(start, end, None)?;
            info!(price = lowest.price, datetime = %lowest.datetime, "lowest price");
        }
        Command::Highest(period) => {
            let (start, end) = period.dates();
            let highest = client.highest_price_for_period(start, end, None)?;
            info!(price = highest.price, datetime = %highest.datetime, "highest price");
        }
        Command::Above(args) => {
            let (start, end) = args.period.dates();
            let entries = client.prices_above_threshold(start, end, args.threshold, None)?;
            print_prices(&entries, Some(args.threshold));
        }
        Command::Below(args) => {
            let (start, end) = args.period.dates();
            let entries = client.prices_below_threshold(start, end, args.threshold, None)?;
            print_prices(&entries, Some(args.threshold));
        }
        Command::Peak(args) => {
            let (start, end) = args.period.dates();
            print_prices(&client.peak_hours(start, end, args.top, None)?, None);
        }
        Command::Valley(args) => {
            let (start, end) = args.period.dates();
            print_prices(&client.valley_hours(start, end, args.top, None)?, None);
        }
    }

    Ok(())
}

fn print_prices(entries: &[PriceEntry], reference: Option<f64>) {
    info!(n_entries = entries.len(), "done");
    println!("{}", build_prices_table(entries, reference));
}
