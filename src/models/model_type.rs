use serde::{Deserialize, Serialize};

/// Kind of model a dataset was produced by.
///
/// Fixed when a dataset handle is created; the data-quality and
/// model-quality endpoints return a different payload shape for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelType {
    Binary,
    MultiClass,
    Regression,
}
