//! Price oracle seam.
//!
//! The host owns real market data; the overlay only asks for one number per
//! internal name. `-1` or `0` means the price is unavailable.

use crate::model::{ItemValue, PricingError, PRICE_UNAVAILABLE};
use std::collections::HashMap;
use std::path::Path;
use tracing::trace;

/// Source of bazaar-or-lowest-BIN prices.
pub trait PriceOracle {
    /// Price for `internal_name`, or `-1`/`0` when unavailable.
    fn bazaar_or_bin(&self, internal_name: &str) -> f64;
}

impl<F> PriceOracle for F
where
    F: Fn(&str) -> f64,
{
    fn bazaar_or_bin(&self, internal_name: &str) -> f64 {
        self(internal_name)
    }
}

/// Price every candidate and fold them into one value.
pub fn aggregate_value<P: PriceOracle + ?Sized>(oracle: &P, candidates: &[String]) -> ItemValue {
    ItemValue::from_component_prices(candidates.iter().map(|id| {
        let price = oracle.bazaar_or_bin(id);
        trace!(internal_name = %id, price, "Price lookup");
        price
    }))
}

/// Fixed price table, e.g. a snapshot exported by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    /// Table over internal name to price.
    pub fn new(prices: HashMap<String, f64>) -> Self {
        Self { prices }
    }

    /// Load a JSON object mapping internal names to prices.
    pub fn load(path: &Path) -> Result<Self, PricingError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PricingError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &contents)
    }

    /// Parse `contents`; `path` is only used in errors.
    pub fn from_json(path: &Path, contents: &str) -> Result<Self, PricingError> {
        let prices = serde_json::from_str(contents).map_err(|e| PricingError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { prices })
    }

    /// Set or replace one price.
    pub fn insert(&mut self, internal_name: impl Into<String>, price: f64) {
        self.prices.insert(internal_name.into(), price);
    }

    /// Number of priced items.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the table has no prices.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl PriceOracle for PriceTable {
    fn bazaar_or_bin(&self, internal_name: &str) -> f64 {
        self.prices
            .get(internal_name)
            .copied()
            .unwrap_or(PRICE_UNAVAILABLE)
    }
}

impl FromIterator<(String, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}
