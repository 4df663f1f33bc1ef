//! Model-quality metric shapes, one per model type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ModelType;

/// Quality of a binary classifier over the reference dataset.
///
/// The confusion-matrix counts are always present; the derived rates are
/// omitted by the server when they are undefined for the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryClassModelQuality {
    pub f1: Option<f64>,
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f_measure: Option<f64>,
    pub weighted_precision: Option<f64>,
    pub weighted_recall: Option<f64>,
    pub weighted_f_measure: Option<f64>,
    pub weighted_true_positive_rate: Option<f64>,
    pub weighted_false_positive_rate: Option<f64>,
    pub true_positive_rate: Option<f64>,
    pub false_positive_rate: Option<f64>,
    pub true_positive_count: u64,
    pub false_positive_count: u64,
    pub true_negative_count: u64,
    pub false_negative_count: u64,
    pub area_under_roc: Option<f64>,
    pub area_under_pr: Option<f64>,
}

/// Per-class slice of a multiclass evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassModelQuality {
    pub class_name: String,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f_measure: Option<f64>,
    pub true_positive_rate: Option<f64>,
    pub false_positive_rate: Option<f64>,
}

/// Quality of a multiclass classifier over the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiClassModelQuality {
    pub f1: Option<f64>,
    pub accuracy: Option<f64>,
    pub weighted_precision: Option<f64>,
    pub weighted_recall: Option<f64>,
    pub weighted_f_measure: Option<f64>,
    pub weighted_true_positive_rate: Option<f64>,
    pub weighted_false_positive_rate: Option<f64>,
    pub class_metrics: Vec<ClassModelQuality>,
}

/// Quality of a regression model over the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionModelQuality {
    pub mse: Option<f64>,
    pub rmse: Option<f64>,
    pub mae: Option<f64>,
    pub mape: Option<f64>,
    pub r2: Option<f64>,
    pub adj_r2: Option<f64>,
    pub variance: Option<f64>,
}

/// Model-quality bundle for any model type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelQuality {
    Binary(BinaryClassModelQuality),
    MultiClass(MultiClassModelQuality),
    Regression(RegressionModelQuality),
}

impl ModelQuality {
    /// Decode a `modelQuality` payload with the shape selected by
    /// `model_type`.
    pub fn from_value(model_type: ModelType, value: Value) -> Result<Self, serde_json::Error> {
        match model_type {
            ModelType::Binary => serde_json::from_value(value).map(ModelQuality::Binary),
            ModelType::MultiClass => serde_json::from_value(value).map(ModelQuality::MultiClass),
            ModelType::Regression => serde_json::from_value(value).map(ModelQuality::Regression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn binary_quality_requires_confusion_counts() {
        let payload = json!({
            "f1": 0.75,
            "accuracy": 0.8,
            "areaUnderRoc": 0.9,
            "truePositiveCount": 3,
            "falsePositiveCount": 1,
            "trueNegativeCount": 5,
            "falseNegativeCount": 1
        });

        let quality = ModelQuality::from_value(ModelType::Binary, payload).unwrap();
        match quality {
            ModelQuality::Binary(binary) => {
                assert_eq!(binary.true_positive_count, 3);
                assert_eq!(binary.area_under_roc, Some(0.9));
                assert_eq!(binary.weighted_recall, None);
            }
            other => panic!("expected binary model quality, got {other:?}"),
        }

        // Without the counts the payload does not match the binary shape.
        let incomplete = json!({"f1": 0.75});
        assert!(ModelQuality::from_value(ModelType::Binary, incomplete).is_err());
    }

    #[test]
    fn regression_quality_decodes() {
        let payload = json!({
            "mse": 1.2,
            "rmse": 1.09,
            "mae": 0.9,
            "r2": 0.87
        });

        let quality = ModelQuality::from_value(ModelType::Regression, payload).unwrap();
        match quality {
            ModelQuality::Regression(regression) => {
                assert_eq!(regression.rmse, Some(1.09));
                assert_eq!(regression.mape, None);
            }
            other => panic!("expected regression model quality, got {other:?}"),
        }
    }
}
