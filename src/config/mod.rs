//! Configuration module.
//!
//! Feature toggles and the highlight colour come from an optional TOML file,
//! merged over defaults and then environment overrides.

pub mod loader;

pub use loader::{
    apply_env_overrides, default_config_path, default_log_path, load_config_file,
    load_config_with_precedence, merge_config, parse_special_color, resolve_config, ConfigError,
    ConfigFile, ResolvedConfig,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_both_features() {
        let config = ResolvedConfig::default();
        assert!(config.cheapest_item_overlay);
        assert!(config.item_highlight);
    }

    #[test]
    fn default_config_is_cloneable() {
        let config = ResolvedConfig::default();
        let cloned = config.clone();
        assert_eq!(config, cloned, "Cloned config should equal original");
    }

    #[test]
    fn default_color_parses() {
        assert!(ResolvedConfig::default().highlight_argb().is_ok());
    }
}
