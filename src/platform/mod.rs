// src/platform/mod.rs

//! Platform integration: the execution-scoped credential, the storage
//! dispatcher, execution identity, and the remote log store.

use std::fmt;

use crate::errors::{EpilaunchError, Result};

pub mod dispatcher;
pub mod identity;
pub mod storage;

pub use dispatcher::{DispatcherClient, StorageProvisioner};
pub use identity::{EnvExecutionName, ExecutionNameResolver};
pub use storage::{LatchStorageClient, LogStore};

/// Environment variable carrying the execution identity for the current
/// managed run. Set by the platform before the task starts.
pub const EXECUTION_TOKEN_VAR: &str = "FLYTE_INTERNAL_EXECUTION_ID";

/// Execution-scoped credential for platform calls.
///
/// Read once at startup and passed explicitly into the clients that need
/// it, so tests can construct clients with a fixed token.
#[derive(Debug, Clone)]
pub struct ExecutionToken(String);

impl ExecutionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Read the token from the ambient environment.
    ///
    /// A missing token is an unrecoverable configuration error: the task
    /// cannot authenticate against the platform at all.
    pub fn from_env() -> Result<Self> {
        match std::env::var(EXECUTION_TOKEN_VAR) {
            Ok(raw) if !raw.is_empty() => Ok(Self(raw)),
            _ => Err(EpilaunchError::ConfigError(format!(
                "failed to get execution token: {EXECUTION_TOKEN_VAR} is not set"
            ))),
        }
    }

    /// Value for the `Authorization` header on platform requests.
    pub fn authorization_header(&self) -> String {
        format!("Latch-Execution-Token {}", self.0)
    }
}

/// Opaque identifier for a provisioned shared storage volume.
///
/// Produced by the dispatcher, consumed by the invoker as the storage claim
/// name in the engine environment. Lifecycle of the volume itself is
/// managed by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeHandle(String);

impl VolumeHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VolumeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_header_carries_token_scheme() {
        let token = ExecutionToken::new("abc123");
        assert_eq!(token.authorization_header(), "Latch-Execution-Token abc123");
    }

    #[test]
    fn volume_handle_displays_raw_name() {
        let vol = VolumeHandle::new("pvc-1234");
        assert_eq!(vol.to_string(), "pvc-1234");
        assert_eq!(vol.as_str(), "pvc-1234");
    }
}
