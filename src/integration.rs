//! Host-facing entry point.
//!
//! The host forwards its GUI events to a single [`MuseumOverlay`]. Session
//! state lives only while museum screens are open: the first museum screen
//! starts a session and any other screen ends it.

use crate::config::{resolve_config, ConfigError, ResolvedConfig};
use crate::index::ItemIndex;
use crate::model::{strip_control_codes, ItemStack, OverlayError, SlotSnapshot};
use crate::pricing::PriceOracle;
use crate::state::DonationTracker;
use crate::view::highlighter::is_museum_inventory;
use crate::view::overlay::PAGE_CONTROL_TOP_LEFT;
use crate::view::{
    draw_cheapest_items, ArrowPages, MuseumItemHighlighter, Point, RenderSink, ScreenGeometry,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// What the host knows about the open container on an event.
#[derive(Debug, Clone, Copy)]
pub struct MuseumScreen<'a> {
    /// Container title, possibly with colour codes.
    pub title: &'a str,
    /// Container slots as currently shown.
    pub slots: &'a SlotSnapshot,
    /// Where the container sits on screen.
    pub geometry: ScreenGeometry,
}

/// Owns configuration, the current museum session and the donated-item
/// highlighter.
pub struct MuseumOverlay {
    config: ResolvedConfig,
    session: Option<DonationTracker>,
    page_control: ArrowPages,
    highlighter: MuseumItemHighlighter,
}

impl MuseumOverlay {
    /// Build the overlay from an already resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] for a malformed highlight colour.
    pub fn new(config: ResolvedConfig) -> Result<Self, ConfigError> {
        let color = config.highlight_argb()?;
        let highlighter = MuseumItemHighlighter::new(config.resolver_cache_capacity, color);
        Ok(Self {
            config,
            session: None,
            page_control: ArrowPages::new(Point::new(
                PAGE_CONTROL_TOP_LEFT.0,
                PAGE_CONTROL_TOP_LEFT.1,
            )),
            highlighter,
        })
    }

    /// Resolve configuration (explicit path, env, default location) and build
    /// the overlay.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is broken.
    pub fn from_config_path(config_path: Option<PathBuf>) -> Result<Self, OverlayError> {
        let config = resolve_config(config_path)?;
        info!(config = ?config, "Configuration loaded and resolved");
        Ok(Self::new(config)?)
    }

    /// Configuration in effect.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Current museum session, if a museum screen is open.
    pub fn session(&self) -> Option<&DonationTracker> {
        self.session.as_ref()
    }

    fn should_render(&self, title: &str) -> bool {
        self.config.cheapest_item_overlay && is_museum_inventory(title)
    }

    /// A screen was opened (`Some(title)`) or closed (`None`).
    pub fn on_screen_changed(&mut self, title: Option<&str>) {
        match title {
            Some(title) if is_museum_inventory(title) => {
                if self.session.is_none() {
                    info!("Museum session started");
                    self.session = Some(DonationTracker::new());
                }
            }
            _ => {
                if self.session.take().is_some() {
                    info!("Museum session ended");
                }
            }
        }
    }

    /// Background redraw of a container screen: update state and draw the
    /// cheapest-item panel. Returns `false` when the overlay does not apply.
    pub fn on_background_drawn<I, P>(
        &mut self,
        screen: &MuseumScreen<'_>,
        index: &I,
        prices: &P,
        sink: &mut dyn RenderSink,
    ) -> bool
    where
        I: ItemIndex + ?Sized,
        P: PriceOracle + ?Sized,
    {
        if !self.should_render(screen.title) {
            return false;
        }

        let title = strip_control_codes(screen.title);
        let now_ms = chrono::Utc::now().timestamp_millis();
        let tracker = self.session.get_or_insert_with(DonationTracker::new);
        if tracker.on_snapshot(&title, screen.slots, index, prices, now_ms) {
            debug!(
                items = tracker.items().len(),
                pages = tracker.total_pages(),
                "Museum snapshot changed"
            );
        }

        draw_cheapest_items(tracker, screen.geometry, &self.page_control, sink);
        true
    }

    /// Mouse input on a container screen. Only button presses switch pages.
    pub fn on_mouse_click(&mut self, screen: &MuseumScreen<'_>, click: Point, pressed: bool) -> bool {
        if !pressed || !self.should_render(screen.title) {
            return false;
        }
        let Some(tracker) = self.session.as_mut() else {
            return false;
        };
        tracker.on_page_control_input(&self.page_control, screen.geometry.origin(), click)
    }

    /// The item repository was reloaded.
    pub fn on_repository_reload(&mut self) {
        self.highlighter.on_repository_reload();
    }

    /// Item about to be drawn in a slot; returns a replacement for donated
    /// placeholders.
    pub fn on_item_override<I: ItemIndex + ?Sized>(
        &mut self,
        index: &I,
        title: &str,
        original: &ItemStack,
    ) -> Option<ItemStack> {
        if !self.config.item_highlight {
            return None;
        }
        self.highlighter.replacement_for(index, title, original)
    }

    /// Draw highlight squares behind donated slots.
    pub fn draw_highlights(&self, screen: &MuseumScreen<'_>, sink: &mut dyn RenderSink) {
        if !self.config.item_highlight {
            return;
        }
        self.highlighter
            .draw_highlights(screen.title, screen.slots, sink);
    }
}
