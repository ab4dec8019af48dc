use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use epilaunch::errors::{EpilaunchError, Result};
use epilaunch::platform::{
    ExecutionNameResolver, LogStore, StorageProvisioner, VolumeHandle,
};

/// A fake provisioner that:
/// - records how many times it was asked for a volume
/// - either hands back a fixed volume name or fails like a dispatcher
///   returning a server error.
pub struct FakeProvisioner {
    volume: Option<String>,
    pub calls: Arc<Mutex<usize>>,
}

impl FakeProvisioner {
    /// Provisioner that succeeds with the given volume name.
    pub fn succeeding(volume: &str) -> Self {
        Self {
            volume: Some(volume.to_string()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Provisioner that fails every request.
    pub fn failing() -> Self {
        Self {
            volume: None,
            calls: Arc::new(Mutex::new(0)),
        }
    }
}

impl StorageProvisioner for FakeProvisioner {
    fn provision_storage(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<VolumeHandle>> + Send + '_>> {
        let volume = self.volume.clone();
        let calls = Arc::clone(&self.calls);

        Box::pin(async move {
            *calls.lock().unwrap() += 1;
            match volume {
                Some(v) => Ok(VolumeHandle::new(v)),
                None => Err(EpilaunchError::ProvisionError(
                    "dispatcher returned 500 Internal Server Error".to_string(),
                )),
            }
        })
    }
}

/// A log store that records upload destinations instead of talking to a
/// remote service. Optionally fails every upload.
pub struct RecordingLogStore {
    pub uploads: Arc<Mutex<Vec<(String, PathBuf)>>>,
    fail: bool,
}

impl RecordingLogStore {
    pub fn new() -> Self {
        Self {
            uploads: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            uploads: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }
}

impl Default for RecordingLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore for RecordingLogStore {
    fn upload(
        &self,
        remote: &str,
        local: &Path,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let remote = remote.to_string();
        let local = local.to_path_buf();
        let uploads = Arc::clone(&self.uploads);
        let fail = self.fail;

        Box::pin(async move {
            if fail {
                return Err(EpilaunchError::UploadError(
                    "simulated upload failure".to_string(),
                ));
            }
            uploads.lock().unwrap().push((remote, local));
            Ok(())
        })
    }
}

/// Resolver that always returns the given execution name.
pub struct FixedExecutionName(pub String);

impl ExecutionNameResolver for FixedExecutionName {
    fn execution_name(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Resolver that never resolves a name.
pub struct NoExecutionName;

impl ExecutionNameResolver for NoExecutionName {
    fn execution_name(&self) -> Option<String> {
        None
    }
}
