//! Rows of the cheapest-undonated-item list.

use std::cmp::Ordering;
use std::fmt;

/// Price reported for a component whose market price is unavailable.
pub const PRICE_UNAVAILABLE: f64 = -1.0;

/// Aggregated worth of one museum entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemValue {
    /// Sum of every component's price.
    Known(f64),
    /// At least one component had no price, or nothing resolved at all.
    Unknown,
}

impl ItemValue {
    /// Sum component prices.
    ///
    /// A single unavailable price (`-1` or `0`) makes the whole entry
    /// `Unknown`; so does an empty or zero total.
    pub fn from_component_prices(prices: impl IntoIterator<Item = f64>) -> Self {
        let mut total = 0.0;
        for price in prices {
            if !is_valid_price(price) {
                return ItemValue::Unknown;
            }
            total += price;
        }
        if total == 0.0 {
            ItemValue::Unknown
        } else {
            ItemValue::Known(total)
        }
    }

    /// Whether every component was priced.
    pub fn is_known(&self) -> bool {
        matches!(self, ItemValue::Known(_))
    }

    /// Numeric sort key; `Unknown` maps to `f64::MAX`.
    pub fn as_f64(&self) -> f64 {
        match self {
            ItemValue::Known(value) => *value,
            ItemValue::Unknown => f64::MAX,
        }
    }

    /// Ascending order with `Unknown` after every known value.
    pub fn cmp_ascending(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ItemValue::Known(a), ItemValue::Known(b)) => a.total_cmp(b),
            (ItemValue::Known(_), ItemValue::Unknown) => Ordering::Less,
            (ItemValue::Unknown, ItemValue::Known(_)) => Ordering::Greater,
            (ItemValue::Unknown, ItemValue::Unknown) => Ordering::Equal,
        }
    }
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemValue::Known(value) => write!(f, "{}", super::text::short_number_format(*value)),
            ItemValue::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Whether an oracle price can take part in a sum.
pub fn is_valid_price(price: f64) -> bool {
    price != PRICE_UNAVAILABLE && price != 0.0
}

/// An undonated item seen on a museum page.
#[derive(Debug, Clone, PartialEq)]
pub struct MuseumItem {
    /// Colour-stripped display name; unique within a tracked list.
    pub name: String,
    /// Aggregated price of the item's components.
    pub value: ItemValue,
    /// Milliseconds since the epoch when the entry was first seen.
    pub observed_at_ms: i64,
}

impl MuseumItem {
    /// Entry for `name` observed at `observed_at_ms`.
    pub fn new(name: impl Into<String>, value: ItemValue, observed_at_ms: i64) -> Self {
        Self {
            name: name.into(),
            value,
            observed_at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_component_makes_value_unknown() {
        assert_eq!(
            ItemValue::from_component_prices([100.0, -1.0]),
            ItemValue::Unknown
        );
        assert_eq!(
            ItemValue::from_component_prices([0.0, 250.0]),
            ItemValue::Unknown
        );
    }

    #[test]
    fn valid_components_are_summed() {
        assert_eq!(
            ItemValue::from_component_prices([100.0, 250.5]),
            ItemValue::Known(350.5)
        );
    }

    #[test]
    fn no_components_is_unknown() {
        assert_eq!(
            ItemValue::from_component_prices(std::iter::empty()),
            ItemValue::Unknown
        );
    }

    #[test]
    fn unknown_sorts_after_known() {
        assert_eq!(
            ItemValue::Known(f64::MAX).cmp_ascending(&ItemValue::Unknown),
            Ordering::Less
        );
        assert_eq!(
            ItemValue::Unknown.cmp_ascending(&ItemValue::Known(1.0)),
            Ordering::Greater
        );
        assert_eq!(ItemValue::Unknown.as_f64(), f64::MAX);
    }

    #[test]
    fn display_uses_short_format() {
        assert_eq!(ItemValue::Known(1234.0).to_string(), "1.2k");
        assert_eq!(ItemValue::Unknown.to_string(), "Unknown");
    }
}
