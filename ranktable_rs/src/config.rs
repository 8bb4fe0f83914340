//! Configuration file support for ranktable.
//!
//! Loads optional `.ranktable/config.toml` from a project root. Every key is
//! optional; omitted keys keep the built-in defaults.

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Rendering constants
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Viewport widths below this render a single star
    pub breakpoint_mobile: u32,
    /// Appended to every currency amount
    pub currency_symbol: String,
    /// Suffix for amounts in thousands
    pub thousand_suffix: String,
    /// Suffix for amounts in millions
    pub million_suffix: String,
    /// Substituted for invalid or out-of-range ratings
    pub default_rating: f64,
    /// Fractional digits of ratings and scaled amounts
    pub decimal_places: usize,
    /// Length of the star sequence on wide viewports
    pub star_count: usize,
    /// Relative path of the dataset
    pub data_path: String,
    /// Id of the element whose content is replaced on every render
    pub container_id: String,
    /// Heading of the static page
    pub page_title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            breakpoint_mobile: 620,
            currency_symbol: "₽".into(),
            thousand_suffix: "K".into(),
            million_suffix: "M".into(),
            default_rating: 0.0,
            decimal_places: 1,
            star_count: 5,
            data_path: "data.json".into(),
            container_id: "rating-table-container".into(),
            page_title: "Рейтинг букмекеров".into(),
        }
    }
}

impl RenderConfig {
    /// Load config from `.ranktable/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".ranktable").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.breakpoint_mobile, 620);
        assert_eq!(config.currency_symbol, "₽");
        assert_eq!(config.thousand_suffix, "K");
        assert_eq!(config.star_count, 5);
        assert_eq!(config.decimal_places, 1);
        assert_eq!(config.default_rating, 0.0);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = RenderConfig::load(temp.path());
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let dir = temp.path().join(".ranktable");
        std::fs::create_dir_all(&dir).expect("create .ranktable");

        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        writeln!(
            file,
            r#"
currency_symbol = "$"
breakpoint_mobile = 480
"#
        )
        .expect("write config");

        let config = RenderConfig::load(temp.path());
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.breakpoint_mobile, 480);
        assert_eq!(config.thousand_suffix, "K");
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "star_count = \"five\"").expect("write config");

        let config = RenderConfig::load_from_path(&path);
        assert_eq!(config, RenderConfig::default());
    }
}
