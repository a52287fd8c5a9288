//! Decoded `energyprices` response and the queries over it.

use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Deserializer, Serialize};

/// Single price bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Start of the bucket as sent by the API.
    #[serde(rename = "readingDate")]
    pub reading_date: String,

    pub price: f64,
}

/// Lowest or highest price with its timestamp.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricePoint {
    pub price: f64,
    pub datetime: String,
}

impl From<&PriceEntry> for PricePoint {
    fn from(entry: &PriceEntry) -> Self {
        Self { price: entry.price, datetime: entry.reading_date.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceReport {
    /// Chronologically ordered buckets, empty when the API sent none.
    #[serde(rename = "Prices", default, deserialize_with = "deserialize_nullable")]
    pub prices: Vec<PriceEntry>,

    /// Average as computed by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,

    /// Remaining fields, kept as-is.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl PriceReport {
    /// First entry with the lowest price.
    #[must_use]
    pub fn lowest(&self) -> Option<PricePoint> {
        self.prices.iter().min_by_key(|entry| OrderedFloat(entry.price)).map(PricePoint::from)
    }

    /// First entry with the highest price.
    #[must_use]
    pub fn highest(&self) -> Option<PricePoint> {
        // `max_by_key` would pick the last one.
        self.prices
            .iter()
            .min_by_key(|entry| Reverse(OrderedFloat(entry.price)))
            .map(PricePoint::from)
    }

    #[must_use]
    pub fn above(&self, threshold: f64) -> Vec<PriceEntry> {
        self.prices.iter().filter(|entry| entry.price > threshold).cloned().collect()
    }

    #[must_use]
    pub fn below(&self, threshold: f64) -> Vec<PriceEntry> {
        self.prices.iter().filter(|entry| entry.price < threshold).cloned().collect()
    }

    /// The `n` most expensive buckets, most expensive first. Equal prices keep their order.
    #[must_use]
    pub fn peak(&self, n: usize) -> Vec<PriceEntry> {
        self.prices
            .iter()
            .sorted_by_key(|entry| Reverse(OrderedFloat(entry.price)))
            .take(n)
            .cloned()
            .collect()
    }

    /// The `n` cheapest buckets, cheapest first. Equal prices keep their order.
    #[must_use]
    pub fn valley(&self, n: usize) -> Vec<PriceEntry> {
        self.prices
            .iter()
            .sorted_by_key(|entry| OrderedFloat(entry.price))
            .take(n)
            .cloned()
            .collect()
    }
}

fn deserialize_nullable<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<PriceEntry>, D::Error> {
    Option::<Vec<PriceEntry>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
