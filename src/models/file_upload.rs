use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::JobStatus;

/// Descriptor issued by the platform when a reference file is ingested.
///
/// Consumed as a read-only snapshot when a dataset handle is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceFileUpload {
    pub uuid: Uuid,
    /// Object-storage path the file was uploaded to.
    pub path: String,
    pub date: DateTime<Utc>,
    pub status: JobStatus,
}
