//! Handle to a reference dataset and its remotely computed metrics.
//!
//! After a reference file is uploaded, the platform computes dataset
//! statistics, data quality and model quality asynchronously. Each accessor
//! on [`ReferenceDataset`] lazily fetches its bundle and caches it according
//! to the job status recorded on the handle: a failed job never hits the
//! network, a succeeded job is fetched at most once per slot, and a job
//! still importing is re-checked on every call.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use super::transport::Transport;
use crate::errors::SdkError;
use crate::models::{
    DataQuality, DatasetStats, JobStatus, ModelQuality, ModelType, ReferenceFileUpload,
};

/// Client-side handle for one reference dataset analysis job.
///
/// Accessors take `&mut self`: the job status and the three cache slots are
/// always written together, so a handle shared across tasks must sit behind
/// a single lock.
pub struct ReferenceDataset {
    transport: Arc<dyn Transport>,
    base_url: String,
    model_uuid: Uuid,
    model_type: ModelType,
    uuid: Uuid,
    path: String,
    date: DateTime<Utc>,
    status: JobStatus,
    statistics: Option<DatasetStats>,
    data_metrics: Option<DataQuality>,
    model_metrics: Option<ModelQuality>,
}

impl ReferenceDataset {
    /// Wrap an already-issued upload descriptor into a handle.
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        model_uuid: Uuid,
        model_type: ModelType,
        upload: ReferenceFileUpload,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            model_uuid,
            model_type,
            uuid: upload.uuid,
            path: upload.path,
            date: upload.date,
            status: upload.status,
            statistics: None,
            data_metrics: None,
            model_metrics: None,
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Job status as of the last server response seen by this handle.
    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// Statistics about the reference dataset, if the job has produced them.
    pub async fn statistics(&mut self) -> Result<Option<DatasetStats>, SdkError> {
        let transport = Arc::clone(&self.transport);
        let url = self.reference_url("statistics");
        resolve(
            transport.as_ref(),
            &url,
            "statistics",
            &mut self.status,
            &mut self.statistics,
            |payload| serde_json::from_value(payload),
        )
        .await
    }

    /// Data-quality metrics, shaped according to the handle's model type.
    pub async fn data_quality(&mut self) -> Result<Option<DataQuality>, SdkError> {
        let transport = Arc::clone(&self.transport);
        let url = self.reference_url("data-quality");
        let model_type = self.model_type;
        resolve(
            transport.as_ref(),
            &url,
            "dataQuality",
            &mut self.status,
            &mut self.data_metrics,
            move |payload| DataQuality::from_value(model_type, payload),
        )
        .await
    }

    /// Model-quality metrics, shaped according to the handle's model type.
    pub async fn model_quality(&mut self) -> Result<Option<ModelQuality>, SdkError> {
        let transport = Arc::clone(&self.transport);
        let url = self.reference_url("model-quality");
        let model_type = self.model_type;
        resolve(
            transport.as_ref(),
            &url,
            "modelQuality",
            &mut self.status,
            &mut self.model_metrics,
            move |payload| ModelQuality::from_value(model_type, payload),
        )
        .await
    }

    fn reference_url(&self, leaf: &str) -> String {
        format!(
            "{}/api/models/{}/reference/{}",
            self.base_url, self.model_uuid, leaf
        )
    }
}

/// One lazy-fetch step for a single metric slot.
///
/// `Error` clears the slot without touching the network. `Succeeded` fetches
/// once to fill an empty slot and keeps the recorded status. `Importing`
/// refreshes both status and slot from the server on every call.
async fn resolve<T: Clone>(
    transport: &dyn Transport,
    url: &str,
    field: &str,
    status: &mut JobStatus,
    slot: &mut Option<T>,
    decode: impl Fn(Value) -> Result<T, serde_json::Error>,
) -> Result<Option<T>, SdkError> {
    match *status {
        JobStatus::Error => {
            *slot = None;
        }
        JobStatus::Succeeded => {
            if slot.is_none() {
                let (_, value) = fetch(transport, url, field, &decode).await?;
                *slot = value;
            }
        }
        JobStatus::Importing => {
            let (new_status, value) = fetch(transport, url, field, &decode).await?;
            if new_status != *status {
                debug!(field, ?new_status, "Job status changed");
            }
            *status = new_status;
            *slot = value;
        }
    }

    Ok(slot.clone())
}

/// Issue the GET for one metric bundle and split the response into the job
/// status and the optional bundle value.
async fn fetch<T>(
    transport: &dyn Transport,
    url: &str,
    field: &str,
    decode: &impl Fn(Value) -> Result<T, serde_json::Error>,
) -> Result<(JobStatus, Option<T>), SdkError> {
    let body = transport.invoke(Method::GET, url, StatusCode::OK).await?;
    decode_response(&body, field, decode)
}

/// Decode a metrics response body.
///
/// `jobStatus` is required; the bundle field is present only once the
/// server has computed it. Any decoding failure carries the raw body.
fn decode_response<T>(
    body: &str,
    field: &str,
    decode: &impl Fn(Value) -> Result<T, serde_json::Error>,
) -> Result<(JobStatus, Option<T>), SdkError> {
    let parse_error = || SdkError::Parse {
        body: body.to_string(),
    };

    let mut root: Value = serde_json::from_str(body).map_err(|_| parse_error())?;

    let job_status = root.get("jobStatus").cloned().ok_or_else(parse_error)?;
    let job_status: JobStatus = serde_json::from_value(job_status).map_err(|_| parse_error())?;

    let bundle = match root.get_mut(field) {
        Some(value) => Some(decode(value.take()).map_err(|_| parse_error())?),
        None => None,
    };

    Ok((job_status, bundle))
}
