pub mod data_quality;
pub mod dataset_stats;
pub mod file_upload;
pub mod job_status;
pub mod model_quality;
pub mod model_type;

pub use data_quality::{
    BinaryClassDataQuality, CategoryFrequency, ClassMedianMetrics, ClassMetrics, DataQuality,
    FeatureMetrics, Histogram, MedianMetrics, MissingValue, MultiClassDataQuality,
    RegressionDataQuality,
};
pub use dataset_stats::DatasetStats;
pub use file_upload::ReferenceFileUpload;
pub use job_status::JobStatus;
pub use model_quality::{
    BinaryClassModelQuality, ClassModelQuality, ModelQuality, MultiClassModelQuality,
    RegressionModelQuality,
};
pub use model_type::ModelType;
