//! Model accuracy metrics
//!
//! Pre-computed evaluation results for the regression models trained on the
//! Bangalore housing dataset. The table is static and only used for display
//! comparison; none of these models execute here.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One row of model accuracy statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetric {
    /// Model name, unique within the table
    pub name: &'static str,
    /// Mean absolute error (lakhs)
    pub mae: f64,
    /// Root mean squared error (lakhs)
    pub rmse: f64,
    /// Coefficient of determination on the test split
    pub r2: f64,
    /// Mean cross-validated R²
    pub cv_r2_mean: f64,
    /// Standard deviation of cross-validated R²
    pub cv_r2_std: f64,
    /// Display color
    pub color: &'static str,
}

/// Evaluation results, ordered by test-split R²
pub static MODEL_METRICS: [ModelMetric; 6] = [
    ModelMetric {
        name: "Random Forest",
        mae: 19.477_181,
        rmse: 72.655_137,
        r2: 0.674_369,
        cv_r2_mean: 0.768_053,
        cv_r2_std: 0.042_637,
        color: "#33a650",
    },
    ModelMetric {
        name: "Ridge",
        mae: 21.039_481,
        rmse: 73.086_154,
        r2: 0.670_494,
        cv_r2_mean: 0.825_670,
        cv_r2_std: 0.023_453,
        color: "#3366cc",
    },
    ModelMetric {
        name: "Gradient Boosting",
        mae: 23.691_746,
        rmse: 73.702_624,
        r2: 0.664_912,
        cv_r2_mean: 0.764_448,
        cv_r2_std: 0.023_583,
        color: "#dc3912",
    },
    ModelMetric {
        name: "Linear Regression",
        mae: 21.202_656,
        rmse: 74.047_080,
        r2: 0.661_773,
        cv_r2_mean: 0.824_182,
        cv_r2_std: 0.041_694,
        color: "#ff9900",
    },
    ModelMetric {
        name: "Lasso",
        mae: 25.139_311,
        rmse: 77.477_694,
        r2: 0.629_707,
        cv_r2_mean: 0.767_977,
        cv_r2_std: 0.025_960,
        color: "#990099",
    },
    ModelMetric {
        name: "XGBoost",
        mae: 21.204_345,
        rmse: 86.113_989,
        r2: 0.542_554,
        cv_r2_mean: 0.782_293,
        cv_r2_std: 0.027_972,
        color: "#0099c6",
    },
];

/// All model metrics, in table order
#[inline]
#[must_use]
pub fn model_metrics() -> &'static [ModelMetric] {
    &MODEL_METRICS
}

/// Find a model's metrics by exact name
#[must_use]
pub fn find_metric(name: &str) -> Option<&'static ModelMetric> {
    MODEL_METRICS.iter().find(|m| m.name == name)
}

/// Metric column used for ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Mean absolute error
    Mae,
    /// Root mean squared error
    Rmse,
    /// Test-split R²
    R2,
    /// Mean cross-validated R²
    CvR2Mean,
    /// Cross-validated R² spread
    CvR2Std,
}

impl MetricKind {
    /// All metric kinds
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Mae,
        MetricKind::Rmse,
        MetricKind::R2,
        MetricKind::CvR2Mean,
        MetricKind::CvR2Std,
    ];

    /// Read this column from a row
    #[inline]
    #[must_use]
    pub fn value(self, metric: &ModelMetric) -> f64 {
        match self {
            MetricKind::Mae => metric.mae,
            MetricKind::Rmse => metric.rmse,
            MetricKind::R2 => metric.r2,
            MetricKind::CvR2Mean => metric.cv_r2_mean,
            MetricKind::CvR2Std => metric.cv_r2_std,
        }
    }

    /// Whether smaller values rank higher
    #[inline]
    #[must_use]
    pub fn lower_is_better(self) -> bool {
        matches!(self, MetricKind::Mae | MetricKind::Rmse | MetricKind::CvR2Std)
    }

    /// Command-line name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Mae => "mae",
            MetricKind::Rmse => "rmse",
            MetricKind::R2 => "r2",
            MetricKind::CvR2Mean => "cv-r2-mean",
            MetricKind::CvR2Std => "cv-r2-std",
        }
    }

    fn compare(self, a: &ModelMetric, b: &ModelMetric) -> Ordering {
        let ord = self.value(a).total_cmp(&self.value(b));
        if self.lower_is_better() {
            ord
        } else {
            ord.reverse()
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| format!("unknown metric: {s}"))
    }
}

/// Models ordered best-first by the given metric
///
/// Ties keep table order.
#[must_use]
pub fn ranked_by(kind: MetricKind) -> Vec<&'static ModelMetric> {
    let mut ranked: Vec<_> = MODEL_METRICS.iter().collect();
    ranked.sort_by(|a, b| kind.compare(a, b));
    ranked
}

/// Best model by the given metric
#[must_use]
pub fn best_by(kind: MetricKind) -> &'static ModelMetric {
    MODEL_METRICS
        .iter()
        .reduce(|best, m| {
            if kind.compare(m, best) == Ordering::Less {
                m
            } else {
                best
            }
        })
        .unwrap_or(&MODEL_METRICS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_six_unique_names() {
        let names: HashSet<_> = model_metrics().iter().map(|m| m.name).collect();
        assert_eq!(model_metrics().len(), 6);
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn find_by_name() {
        let xgb = find_metric("XGBoost").unwrap();
        assert_eq!(xgb.color, "#0099c6");
        assert!(find_metric("xgboost").is_none());
    }

    #[test]
    fn best_models() {
        assert_eq!(best_by(MetricKind::R2).name, "Random Forest");
        assert_eq!(best_by(MetricKind::Mae).name, "Random Forest");
        assert_eq!(best_by(MetricKind::CvR2Mean).name, "Ridge");
        assert_eq!(best_by(MetricKind::CvR2Std).name, "Ridge");
    }

    #[test]
    fn ranking_direction() {
        let by_rmse: Vec<_> = ranked_by(MetricKind::Rmse).iter().map(|m| m.name).collect();
        assert_eq!(by_rmse.first(), Some(&"Random Forest"));
        assert_eq!(by_rmse.last(), Some(&"XGBoost"));

        let by_r2 = ranked_by(MetricKind::R2);
        assert!(by_r2.windows(2).all(|w| w[0].r2 >= w[1].r2));
    }

    #[test]
    fn metric_kind_parse() {
        assert_eq!("cv_r2_mean".parse::<MetricKind>(), Ok(MetricKind::CvR2Mean));
        assert_eq!("RMSE".parse::<MetricKind>(), Ok(MetricKind::Rmse));
        assert!("accuracy".parse::<MetricKind>().is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(find_metric("Ridge").unwrap()).unwrap();
        assert_eq!(json["cvR2Mean"], 0.825_67);
        assert_eq!(json["name"], "Ridge");
    }
}
