// src/platform/storage.rs

//! Remote log store.
//!
//! The invoker only needs "put this local file at that remote path", so the
//! `LogStore` trait is the whole contract; the platform's object store
//! internals stay behind it. Tests substitute a recording fake.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tracing::debug;

use crate::errors::{EpilaunchError, Result};
use crate::platform::ExecutionToken;

/// Data-plane endpoint accepting file uploads for `latch:///` paths.
pub const DATA_ENDPOINT: &str =
    "http://nf-dispatcher-service.flyte.svc.cluster.local/ldata/upload";

/// Trait abstracting the remote store the run log is uploaded to.
pub trait LogStore: Send + Sync {
    /// Upload the file at `local` to the `remote` path.
    fn upload(
        &self,
        remote: &str,
        local: &Path,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Real store client: an authenticated PUT of the file bytes to the
/// platform data endpoint, addressed by the remote path.
pub struct LatchStorageClient {
    http: reqwest::Client,
    endpoint: String,
    token: ExecutionToken,
}

impl LatchStorageClient {
    pub fn new(token: ExecutionToken) -> Self {
        Self::with_endpoint(token, DATA_ENDPOINT)
    }

    pub fn with_endpoint(token: ExecutionToken, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token,
        }
    }
}

impl LogStore for LatchStorageClient {
    fn upload(
        &self,
        remote: &str,
        local: &Path,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let remote = remote.to_string();
        let local: PathBuf = local.to_path_buf();

        Box::pin(async move {
            let contents = tokio::fs::read(&local).await?;

            debug!(remote = %remote, bytes = contents.len(), "uploading file to remote store");

            let resp = self
                .http
                .put(&self.endpoint)
                .query(&[("path", remote.as_str())])
                .header(
                    reqwest::header::AUTHORIZATION,
                    self.token.authorization_header(),
                )
                .body(contents)
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(EpilaunchError::UploadError(format!(
                    "data endpoint returned {status} for {remote}"
                )));
            }
            Ok(())
        })
    }
}

/// Join remote path segments onto a base, normalising slashes.
///
/// Mirrors how the platform composes `latch:///` destinations: the base
/// keeps its scheme untouched, each segment contributes exactly one `/`.
pub fn remote_join(base: &str, segments: &[&str]) -> String {
    let mut out = base.trim_end_matches('/').to_string();
    for seg in segments {
        let seg = seg.trim_matches('/');
        if seg.is_empty() {
            continue;
        }
        out.push('/');
        out.push_str(seg);
    }
    out
}
