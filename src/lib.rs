//! Museum overlay core.
//!
//! Prices undonated museum items, ranks them cheapest first across pages and
//! categories, and swaps donated placeholders for the real items. The host
//! game client feeds events into [`integration::MuseumOverlay`] and supplies
//! the item repository, price oracle and render sink.
//!
//! Layered as a pure core (`model`, `index`, `cache`, `resolve`, `state`)
//! behind an impure shell (`view`, `logging`, `config`).

pub mod cache;
pub mod config;
pub mod index;
pub mod logging;
pub mod model;
pub mod pricing;
pub mod resolve;
pub mod state;
pub mod view;

// Re-export main event entry point
pub mod integration;

pub use integration::{MuseumOverlay, MuseumScreen};
