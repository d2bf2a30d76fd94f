//! Settings file
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [weights]
//! base_price = 6500.0
//!
//! [weights.location]
//! Whitefield = 0.12
//! default = 0.1
//! ```
//!
//! Every field is optional. Without `--config`, `bhp.toml` in the working
//! directory is used when present.

use anyhow::Context;
use bhp_client::ClientConfig;
use bhp_estimator::FeatureWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file looked up when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "bhp.toml";

/// Command-line settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prediction service
    pub api: ClientConfig,
    /// Heuristic weights
    pub weights: FeatureWeights,
}

impl Settings {
    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML or the weights are invalid
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let settings: Self = toml::from_str(text).context("invalid settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, or from `bhp.toml` if present
    ///
    /// Environment overrides are applied last.
    ///
    /// # Errors
    /// Returns error if an explicit file is missing, or any file is invalid
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let settings = match path {
            Some(path) => Self::read(path)?,
            None if Path::new(DEFAULT_SETTINGS_FILE).is_file() => {
                Self::read(Path::new(DEFAULT_SETTINGS_FILE))?
            }
            None => Self::default(),
        };

        Ok(Self {
            api: settings.api.with_env_overrides(),
            ..settings
        })
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.weights.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_settings_are_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn sections_override_independently() {
        let settings = Settings::from_toml(
            r#"
            [api]
            base_url = "http://predictor:5000/api"

            [weights.property_type]
            Villa = 1.6
            default = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.api.base_url, "http://predictor:5000/api");
        assert_eq!(settings.weights.property_type.lookup("Villa"), 1.6);
        assert_eq!(settings.weights.location, FeatureWeights::default().location);
    }

    #[test]
    fn table_without_default_rejected() {
        let err = Settings::from_toml(
            r#"
            [weights.location]
            Whitefield = 0.2
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("default"));
    }

    #[test]
    fn invalid_base_price_rejected() {
        assert!(Settings::from_toml("[weights]\nbase_price = -1.0").is_err());
    }

    #[test]
    fn negative_factors_rejected() {
        let err = Settings::from_toml(
            r#"
            [weights.property_type]
            Apartment = -1.0
            default = 1.0
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("property_type"));

        let text = "[weights.location]\nWhitefield = -0.3\ndefault = 0.1";
        assert!(Settings::from_toml(text).is_err());
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[weights]\nbase_price = 7000.0").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.weights.base_price, 7000.0);
    }

    #[test]
    fn load_missing_explicit_file() {
        let err = Settings::load(Some(Path::new("/no/such/bhp.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read settings"));
    }
}
