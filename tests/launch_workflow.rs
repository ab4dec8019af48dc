// tests/launch_workflow.rs

//! The two-stage workflow: provisioning gates the invoker.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;

use epilaunch::errors::EpilaunchError;
use epilaunch::launch;
use epilaunch::runtime::{PipelineInvoker, RuntimeLayout};
use epilaunch_test_utils::builders::ParamSetBuilder;
use epilaunch_test_utils::fakes::{FakeProvisioner, NoExecutionName, RecordingLogStore};
use epilaunch_test_utils::init_tracing;
use tempfile::TempDir;

fn test_layout(tmp: &TempDir, engine_script: &str) -> RuntimeLayout {
    let host_root = tmp.path().join("root");
    fs::create_dir_all(&host_root).unwrap();
    fs::write(host_root.join("main.nf"), "workflow {}\n").unwrap();

    let engine_bin = tmp.path().join("bin/nextflow");
    fs::create_dir_all(engine_bin.parent().unwrap()).unwrap();
    fs::write(&engine_bin, engine_script).unwrap();
    fs::set_permissions(&engine_bin, fs::Permissions::from_mode(0o755)).unwrap();

    RuntimeLayout {
        host_root,
        shared_dir: tmp.path().join("nf-workdir"),
        engine_bin,
        ..RuntimeLayout::default()
    }
}

#[tokio::test]
async fn provisioning_failure_prevents_any_invocation() {
    init_tracing();
    let tmp = TempDir::new().unwrap();
    // The engine would leave a marker behind if it ever ran.
    let layout = test_layout(&tmp, "#!/bin/sh\ntouch engine-ran\nexit 0\n");
    let shared_dir = layout.shared_dir.clone();

    let provisioner = FakeProvisioner::failing();
    let store = RecordingLogStore::new();
    let uploads = store.uploads.clone();
    let invoker = PipelineInvoker::new(layout, store, NoExecutionName);

    let params = ParamSetBuilder::minimal().build();
    let err = launch(&provisioner, &invoker, &params).await.unwrap_err();

    match err {
        EpilaunchError::ProvisionError(msg) => assert!(msg.contains("500")),
        other => panic!("expected ProvisionError, got {other:?}"),
    }

    assert_eq!(*provisioner.calls.lock().unwrap(), 1);
    // The invoker never ran: nothing was staged, executed, or uploaded.
    assert!(!shared_dir.exists());
    assert!(uploads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn provisioned_volume_reaches_the_engine() {
    init_tracing();
    let tmp = TempDir::new().unwrap();
    let layout = test_layout(
        &tmp,
        "#!/bin/sh\nprintf '%s' \"$K8S_STORAGE_CLAIM_NAME\" > claim.txt\nexit 0\n",
    );
    let shared_dir = layout.shared_dir.clone();

    let provisioner = FakeProvisioner::succeeding("pvc-workdir-11");
    let invoker = PipelineInvoker::new(layout, RecordingLogStore::new(), NoExecutionName);

    let params = ParamSetBuilder::minimal().build();
    launch(&provisioner, &invoker, &params).await.unwrap();

    assert_eq!(
        fs::read_to_string(shared_dir.join("claim.txt")).unwrap(),
        "pvc-workdir-11"
    );
}

#[tokio::test]
async fn engine_failure_propagates_through_launch() {
    init_tracing();
    let tmp = TempDir::new().unwrap();
    let layout = test_layout(&tmp, "#!/bin/sh\nexit 2\n");

    let provisioner = FakeProvisioner::succeeding("pvc-1");
    let invoker = PipelineInvoker::new(layout, RecordingLogStore::new(), NoExecutionName);

    let params = ParamSetBuilder::minimal().build();
    let err = launch(&provisioner, &invoker, &params).await.unwrap_err();
    match err {
        EpilaunchError::EngineExit(code) => assert_eq!(code, 2),
        other => panic!("expected EngineExit, got {other:?}"),
    }
}
