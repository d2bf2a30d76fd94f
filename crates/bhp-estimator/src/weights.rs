//! Feature weight tables
//!
//! A [`FeatureWeightTable`] maps a categorical value (locality, bedroom
//! count, property type, ...) to the factor it contributes. Every table owns
//! a `default` factor, so a lookup always resolves.
//!
//! Tables serialize as flat maps with a reserved `default` key:
//!
//! ```toml
//! [weights.location]
//! Whitefield = 0.12
//! Koramangala = 0.27
//! default = 0.1
//! ```

use crate::error::EstimatorError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved key holding the fallback factor
pub const DEFAULT_KEY: &str = "default";

/// Base price per square foot anchoring the heuristic
pub const BASE_PRICE: f64 = 6500.0;

/// Per-square-foot area weight
pub const AREA_WEIGHT: f64 = 0.35;

/// Result of resolving a key against a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved {
    /// Key present in the table
    Matched(f64),
    /// Key absent, `default` used
    Fallback(f64),
}

impl Resolved {
    /// Resolved factor
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Resolved::Matched(v) | Resolved::Fallback(v) => v,
        }
    }

    /// Whether the default entry was used
    #[inline]
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Resolved::Fallback(_))
    }
}

/// Category-to-factor table with mandatory fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, f64>",
    into = "IndexMap<String, f64>"
)]
pub struct FeatureWeightTable {
    entries: IndexMap<String, f64>,
    default: f64,
}

impl FeatureWeightTable {
    /// Create empty table with a fallback factor
    #[inline]
    #[must_use]
    pub fn new(default: f64) -> Self {
        Self {
            entries: IndexMap::new(),
            default,
        }
    }

    /// With an entry
    #[inline]
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, factor: f64) -> Self {
        self.insert(key, factor);
        self
    }

    /// Insert or replace an entry
    ///
    /// Inserting the reserved `default` key replaces the fallback factor.
    pub fn insert(&mut self, key: impl Into<String>, factor: f64) {
        let key = key.into();
        if key == DEFAULT_KEY {
            self.default = factor;
        } else {
            self.entries.insert(key, factor);
        }
    }

    /// Resolve a key, reporting whether the fallback was used
    #[inline]
    #[must_use]
    pub fn resolve(&self, key: &str) -> Resolved {
        match self.entries.get(key) {
            Some(&factor) => Resolved::Matched(factor),
            None => Resolved::Fallback(self.default),
        }
    }

    /// Factor for key, or the default factor
    #[inline]
    #[must_use]
    pub fn lookup(&self, key: &str) -> f64 {
        self.resolve(key).value()
    }

    /// Fallback factor
    #[inline]
    #[must_use]
    pub fn default_factor(&self) -> f64 {
        self.default
    }

    /// Check if key has its own entry
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Recognized keys, in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of recognized keys (excluding `default`)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no recognized keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn factors(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(self.default).chain(self.entries.values().copied())
    }
}

impl TryFrom<IndexMap<String, f64>> for FeatureWeightTable {
    type Error = EstimatorError;

    fn try_from(mut map: IndexMap<String, f64>) -> Result<Self, Self::Error> {
        let default = map
            .shift_remove(DEFAULT_KEY)
            .ok_or(EstimatorError::MissingDefault)?;
        Ok(Self {
            entries: map,
            default,
        })
    }
}

impl From<FeatureWeightTable> for IndexMap<String, f64> {
    fn from(table: FeatureWeightTable) -> Self {
        let mut map = table.entries;
        map.insert(DEFAULT_KEY.to_string(), table.default);
        map
    }
}

/// Complete weight configuration for the heuristic estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureWeights {
    /// Base price per square foot
    pub base_price: f64,
    /// Area weight
    pub area: f64,
    /// Locality factors
    pub location: FeatureWeightTable,
    /// Bedroom-count factors, keyed by count ("1".."5")
    pub bedrooms: FeatureWeightTable,
    /// Bathroom-count factors, keyed by count ("1".."4")
    pub bathrooms: FeatureWeightTable,
    /// Property-type multipliers, keyed by type label
    pub property_type: FeatureWeightTable,
}

impl FeatureWeights {
    /// Built-in weights
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate weights loaded from configuration
    ///
    /// # Errors
    /// Returns error if the base price is not positive, any factor is
    /// negative or not finite, or a property-type multiplier is zero
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.base_price.is_finite() || self.base_price <= 0.0 {
            return Err(EstimatorError::InvalidWeights(format!(
                "base_price must be positive, got {}",
                self.base_price
            )));
        }
        if !self.area.is_finite() {
            return Err(EstimatorError::InvalidWeights(
                "area weight must be finite".to_string(),
            ));
        }

        // multipliers must stay positive, additive factors may be zero
        let tables = [
            ("location", &self.location, false),
            ("bedrooms", &self.bedrooms, false),
            ("bathrooms", &self.bathrooms, false),
            ("property_type", &self.property_type, true),
        ];
        for (name, table, multiplier) in tables {
            let invalid = table.factors().find(|&f| {
                let in_range = if multiplier { f > 0.0 } else { f >= 0.0 };
                !f.is_finite() || !in_range
            });
            if let Some(factor) = invalid {
                let bound = if multiplier { "positive" } else { "non-negative" };
                return Err(EstimatorError::InvalidWeights(format!(
                    "{name} factors must be finite and {bound}, got {factor}"
                )));
            }
        }

        Ok(())
    }
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            base_price: BASE_PRICE,
            area: AREA_WEIGHT,
            location: FeatureWeightTable::new(0.1)
                .with_entry("Whitefield", 0.12)
                .with_entry("Electronic City", 0.09)
                .with_entry("Indiranagar", 0.25)
                .with_entry("Koramangala", 0.27)
                .with_entry("Jayanagar", 0.18)
                .with_entry("Marathahalli", 0.14)
                .with_entry("HSR Layout", 0.22),
            bedrooms: FeatureWeightTable::new(0.1)
                .with_entry("1", 0.05)
                .with_entry("2", 0.1)
                .with_entry("3", 0.15)
                .with_entry("4", 0.2)
                .with_entry("5", 0.25),
            bathrooms: FeatureWeightTable::new(0.1)
                .with_entry("1", 0.05)
                .with_entry("2", 0.1)
                .with_entry("3", 0.15)
                .with_entry("4", 0.2),
            property_type: FeatureWeightTable::new(1.0)
                .with_entry("Apartment", 1.0)
                .with_entry("Villa", 1.4)
                .with_entry("Independent House", 1.2)
                .with_entry("Builder Floor", 1.1)
                .with_entry("Plot", 0.8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_matches_and_falls_back() {
        let weights = FeatureWeights::default();
        assert_eq!(weights.location.lookup("Koramangala"), 0.27);
        assert_eq!(weights.location.lookup("Nowhere"), 0.1);
        assert_eq!(weights.bedrooms.lookup("5"), 0.25);
        assert_eq!(weights.bathrooms.lookup("5"), 0.1);
        assert_eq!(weights.property_type.lookup("Villa"), 1.4);
        assert_eq!(weights.property_type.lookup("Castle"), 1.0);
    }

    #[test]
    fn resolve_reports_fallback() {
        let table = FeatureWeightTable::new(0.5).with_entry("a", 2.0);
        assert_eq!(table.resolve("a"), Resolved::Matched(2.0));
        assert!(table.resolve("b").is_fallback());
        assert_eq!(table.resolve("b").value(), 0.5);
    }

    #[test]
    fn inserting_default_key_replaces_fallback() {
        let mut table = FeatureWeightTable::new(0.5);
        table.insert(DEFAULT_KEY, 0.7);
        assert!(table.is_empty());
        assert_eq!(table.default_factor(), 0.7);
    }

    #[test]
    fn table_deserializes_from_flat_map() {
        let table: FeatureWeightTable =
            serde_json::from_str(r#"{"Whitefield": 0.3, "default": 0.05}"#).unwrap();
        assert_eq!(table.lookup("Whitefield"), 0.3);
        assert_eq!(table.lookup("Elsewhere"), 0.05);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn table_without_default_is_rejected() {
        let result: Result<FeatureWeightTable, _> =
            serde_json::from_str(r#"{"Whitefield": 0.3}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("default"));
    }

    #[test]
    fn table_serializes_default_last() {
        let table = FeatureWeightTable::new(0.1)
            .with_entry("b", 0.2)
            .with_entry("a", 0.3);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"b":0.2,"a":0.3,"default":0.1}"#);
    }

    #[test]
    fn weights_partial_toml_override() {
        let weights: FeatureWeights = toml::from_str(
            r#"
            base_price = 7000.0

            [location]
            Hebbal = 0.2
            default = 0.08
            "#,
        )
        .unwrap();

        assert_eq!(weights.base_price, 7000.0);
        assert_eq!(weights.location.lookup("Hebbal"), 0.2);
        assert_eq!(weights.location.lookup("Koramangala"), 0.08);
        // untouched sections keep built-in tables
        assert_eq!(weights.bedrooms, FeatureWeights::default().bedrooms);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_weights() {
        let mut weights = FeatureWeights::default();
        weights.base_price = 0.0;
        assert!(matches!(
            weights.validate(),
            Err(EstimatorError::InvalidWeights(_))
        ));

        let mut weights = FeatureWeights::default();
        weights.bathrooms.insert("2", f64::INFINITY);
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("bathrooms"));

        let mut weights = FeatureWeights::default();
        weights.location.insert("Whitefield", -0.2);
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("location"));

        let mut weights = FeatureWeights::default();
        weights.bedrooms.insert(DEFAULT_KEY, -0.1);
        assert!(weights.validate().is_err());

        let mut weights = FeatureWeights::default();
        weights.property_type.insert("Plot", 0.0);
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("property_type"));

        // zero is a valid additive factor
        let mut weights = FeatureWeights::default();
        weights.location.insert("Whitefield", 0.0);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn negative_multiplier_from_toml_rejected() {
        let weights: FeatureWeights = toml::from_str(
            r#"
            [property_type]
            Apartment = -1.0
            default = 1.0
            "#,
        )
        .unwrap();
        assert!(matches!(
            weights.validate(),
            Err(EstimatorError::InvalidWeights(_))
        ));
    }
}
