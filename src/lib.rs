//! Client SDK for the Driftwatch ML monitoring platform.
//!
//! The platform computes metrics for uploaded datasets asynchronously.
//! This crate wraps those server-side jobs in typed handles: a
//! [`client::ReferenceDataset`] tracks one reference dataset's analysis job
//! and lazily fetches its statistics, data-quality and model-quality bundles
//! as they become available.

pub mod client;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;

pub use client::Client;
pub use config::ClientConfig;
pub use errors::SdkError;
