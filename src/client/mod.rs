pub mod reference_dataset;
pub mod transport;

pub use reference_dataset::ReferenceDataset;
pub use transport::{HttpTransport, Transport};

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::config::ClientConfig;
use crate::errors::SdkError;
use crate::models::{ModelType, ReferenceFileUpload};

/// Entry point for SDK consumers.
///
/// Owns the resolved configuration and the shared transport. Dataset
/// handles are created from upload descriptors returned by the platform.
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Build a client with the default HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        let transport = HttpTransport::with_timeout(Duration::from_secs(config.timeout_secs))?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Build a client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Wrap an upload descriptor into a reference dataset handle.
    pub fn reference_dataset(
        &self,
        model_uuid: Uuid,
        model_type: ModelType,
        upload: ReferenceFileUpload,
    ) -> ReferenceDataset {
        ReferenceDataset::new(
            Arc::clone(&self.transport),
            &self.config.base_url,
            model_uuid,
            model_type,
            upload,
        )
    }
}
