//! Error types for museum-overlay.
//!
//! Nothing on the per-event path fails: empty slots, unresolvable names and
//! unavailable prices all degrade into "Unknown" rows. Errors only come from
//! loading data from disk (item repository, price table, config, logging).
//!
//! # Error Hierarchy
//!
//! - [`OverlayError`] - top-level wrapper used by hosts during start-up
//!   - [`IndexError`] - item repository loading failures
//!   - [`PricingError`] - price table loading failures
//!   - [`ConfigError`](crate::config::ConfigError) - config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing initialisation failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned from start-up helpers.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// Item repository could not be loaded.
    #[error("Failed to load item repository: {0}")]
    Index(#[from] IndexError),

    /// Price table could not be loaded.
    #[error("Failed to load prices: {0}")]
    Pricing(#[from] PricingError),

    /// Config file could not be used.
    #[error("Invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be set up.
    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),
}

/// Errors raised while reading an item repository directory.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The items directory could not be listed.
    #[error("Failed to read item directory {path:?}: {source}")]
    ReadDir {
        /// Directory that was listed.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// A single item file could not be read.
    #[error("Failed to read item file {path:?}: {source}")]
    ReadItem {
        /// Item file.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// A single item file is not a valid item definition.
    #[error("Invalid item definition in {path:?}: {reason}")]
    ParseItem {
        /// Item file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// An item definition has an empty internal name.
    #[error("Item definition in {0:?} has no internal name")]
    MissingInternalName(PathBuf),
}

/// Errors raised while loading a price table.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The price file could not be read.
    #[error("Failed to read price file {path:?}: {source}")]
    Read {
        /// Price file.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// The price file is not a JSON object of numbers.
    #[error("Invalid price data in {path:?}: {reason}")]
    Parse {
        /// Price file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_converts_into_overlay_error() {
        let err: OverlayError = IndexError::MissingInternalName(PathBuf::from("items/X.json")).into();
        assert!(matches!(err, OverlayError::Index(_)));
        assert!(err.to_string().contains("items/X.json"));
    }

    #[test]
    fn pricing_error_message_includes_reason() {
        let err = PricingError::Parse {
            path: PathBuf::from("prices.json"),
            reason: "expected map".to_string(),
        };
        assert!(err.to_string().contains("expected map"));
    }
}
