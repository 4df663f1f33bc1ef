//! Data-quality metric shapes.
//!
//! The `dataQuality` bundle carries a different top-level shape per model
//! type. The handle's [`ModelType`] picks the variant at decode time; the
//! payload is never sniffed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ModelType;

/// Missing-value summary for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingValue {
    pub count: u64,
    pub percentage: Option<f64>,
}

/// Row count and share for one target class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMetrics {
    pub name: String,
    pub count: u64,
    pub percentage: Option<f64>,
}

/// Quartile summary of a numerical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedianMetrics {
    pub perc_25: Option<f64>,
    pub median: Option<f64>,
    pub perc_75: Option<f64>,
}

/// Per-class distribution of a numerical feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMedianMetrics {
    pub name: String,
    pub mean: Option<f64>,
    pub median_metrics: MedianMetrics,
}

/// Fixed-bucket histogram of a numerical feature.
///
/// `buckets` holds the bucket edges, so it is one longer than
/// `reference_values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    pub buckets: Vec<f64>,
    pub reference_values: Vec<u64>,
}

/// Occurrence count and share for one category of a categorical feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFrequency {
    pub name: String,
    pub count: u64,
    pub frequency: Option<f64>,
}

/// Quality metrics for a single feature column.
///
/// The wire discriminates on the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FeatureMetrics {
    #[serde(rename_all = "camelCase")]
    Numerical {
        feature_name: String,
        missing_value: MissingValue,
        mean: Option<f64>,
        std: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
        median_metrics: MedianMetrics,
        class_median_metrics: Vec<ClassMedianMetrics>,
        histogram: Histogram,
    },
    #[serde(rename_all = "camelCase")]
    Categorical {
        feature_name: String,
        missing_value: MissingValue,
        distinct_value: u64,
        category_frequency: Vec<CategoryFrequency>,
    },
}

/// Data quality of a binary-classification reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryClassDataQuality {
    pub n_observations: u64,
    pub class_metrics: Vec<ClassMetrics>,
    pub feature_metrics: Vec<FeatureMetrics>,
}

/// Data quality of a multiclass-classification reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiClassDataQuality {
    pub n_observations: u64,
    pub class_metrics: Vec<ClassMetrics>,
    pub feature_metrics: Vec<FeatureMetrics>,
}

/// Data quality of a regression reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionDataQuality {
    pub n_observations: u64,
    /// Distribution of the regression target column.
    pub target_metrics: FeatureMetrics,
    pub feature_metrics: Vec<FeatureMetrics>,
}

/// Data-quality bundle for any model type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataQuality {
    Binary(BinaryClassDataQuality),
    MultiClass(MultiClassDataQuality),
    Regression(RegressionDataQuality),
}

impl DataQuality {
    /// Decode a `dataQuality` payload with the shape selected by
    /// `model_type`.
    pub fn from_value(model_type: ModelType, value: Value) -> Result<Self, serde_json::Error> {
        match model_type {
            ModelType::Binary => serde_json::from_value(value).map(DataQuality::Binary),
            ModelType::MultiClass => serde_json::from_value(value).map(DataQuality::MultiClass),
            ModelType::Regression => serde_json::from_value(value).map(DataQuality::Regression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numerical_feature() -> Value {
        json!({
            "featureName": "num1",
            "type": "numerical",
            "missingValue": {"count": 1, "percentage": 10.0},
            "mean": 1.16,
            "std": 0.75,
            "min": 0.5,
            "max": 3.0,
            "medianMetrics": {"perc25": 1.0, "median": 1.0, "perc75": 1.0},
            "classMedianMetrics": [],
            "histogram": {
                "buckets": [0.5, 1.75, 3.0],
                "referenceValues": [6, 3]
            }
        })
    }

    fn categorical_feature() -> Value {
        json!({
            "featureName": "cat1",
            "type": "categorical",
            "missingValue": {"count": 0, "percentage": 0.0},
            "distinctValue": 2,
            "categoryFrequency": [
                {"name": "a", "count": 7, "frequency": 0.7},
                {"name": "b", "count": 3, "frequency": 0.3}
            ]
        })
    }

    #[test]
    fn feature_metrics_discriminates_on_type() {
        let numerical: FeatureMetrics = serde_json::from_value(numerical_feature()).unwrap();
        assert!(matches!(numerical, FeatureMetrics::Numerical { .. }));

        let categorical: FeatureMetrics = serde_json::from_value(categorical_feature()).unwrap();
        match categorical {
            FeatureMetrics::Categorical {
                feature_name,
                distinct_value,
                category_frequency,
                ..
            } => {
                assert_eq!(feature_name, "cat1");
                assert_eq!(distinct_value, 2);
                assert_eq!(category_frequency.len(), 2);
            }
            other => panic!("expected categorical metrics, got {other:?}"),
        }
    }

    #[test]
    fn binary_shape_selected_for_binary_model() {
        let payload = json!({
            "nObservations": 10,
            "classMetrics": [
                {"name": "0", "count": 4, "percentage": 40.0},
                {"name": "1", "count": 6, "percentage": 60.0}
            ],
            "featureMetrics": [numerical_feature(), categorical_feature()]
        });

        let quality = DataQuality::from_value(ModelType::Binary, payload).unwrap();
        match quality {
            DataQuality::Binary(binary) => {
                assert_eq!(binary.n_observations, 10);
                assert_eq!(binary.class_metrics.len(), 2);
                assert_eq!(binary.feature_metrics.len(), 2);
            }
            other => panic!("expected binary data quality, got {other:?}"),
        }
    }

    #[test]
    fn regression_shape_requires_target_metrics() {
        let payload = json!({
            "nObservations": 10,
            "classMetrics": [],
            "featureMetrics": []
        });

        // A binary-shaped payload has no target column distribution.
        assert!(DataQuality::from_value(ModelType::Regression, payload).is_err());
    }
}
