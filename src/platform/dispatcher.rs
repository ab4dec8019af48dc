// src/platform/dispatcher.rs

//! Shared storage provisioning against the cluster-local dispatcher.
//!
//! The invoker talks to a `StorageProvisioner` instead of a concrete HTTP
//! client. This makes it easy to swap in a fake provisioner in tests while
//! keeping the production client here.
//!
//! Provisioning is a single attempt: the dispatcher either hands back a
//! volume or the whole execution aborts. There is no retry.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{EpilaunchError, Result};
use crate::platform::{ExecutionToken, VolumeHandle};

/// Cluster-internal provisioning endpoint.
pub const PROVISION_ENDPOINT: &str =
    "http://nf-dispatcher-service.flyte.svc.cluster.local/provision-storage";

/// Size of the shared volume requested for every run.
pub const STORAGE_GIB: u64 = 100;

/// Trait abstracting how a shared storage volume is obtained.
pub trait StorageProvisioner: Send + Sync {
    /// Request a volume for the current execution.
    fn provision_storage(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<VolumeHandle>> + Send + '_>>;
}

#[derive(Debug, Serialize)]
struct ProvisionRequest {
    storage_gib: u64,
}

#[derive(Debug, Deserialize)]
struct ProvisionResponse {
    name: String,
}

/// Real dispatcher client used in production.
pub struct DispatcherClient {
    http: reqwest::Client,
    endpoint: String,
    token: ExecutionToken,
}

impl DispatcherClient {
    pub fn new(token: ExecutionToken) -> Self {
        Self::with_endpoint(token, PROVISION_ENDPOINT)
    }

    /// Client against a non-default endpoint.
    pub fn with_endpoint(token: ExecutionToken, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token,
        }
    }
}

impl StorageProvisioner for DispatcherClient {
    fn provision_storage(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<VolumeHandle>> + Send + '_>> {
        Box::pin(async move {
            debug!(endpoint = %self.endpoint, storage_gib = STORAGE_GIB, "requesting shared storage volume");

            let resp = self
                .http
                .post(&self.endpoint)
                .header(
                    reqwest::header::AUTHORIZATION,
                    self.token.authorization_header(),
                )
                .json(&ProvisionRequest {
                    storage_gib: STORAGE_GIB,
                })
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(EpilaunchError::ProvisionError(format!(
                    "dispatcher returned {status}: {body}"
                )));
            }

            let body: ProvisionResponse = resp.json().await?;
            Ok(VolumeHandle::new(body.name))
        })
    }
}
