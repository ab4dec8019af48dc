// src/lib.rs

pub mod cli;
pub mod errors;
pub mod logging;
pub mod params;
pub mod platform;
pub mod runtime;

use tracing::info;

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::params::ParamSet;
use crate::platform::{
    DispatcherClient, EnvExecutionName, ExecutionNameResolver, ExecutionToken,
    LatchStorageClient, LogStore, StorageProvisioner, VolumeHandle,
};
use crate::runtime::{build_command, environment_overrides, PipelineInvoker, RuntimeLayout};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - parameter file loading and schema binding
/// - the execution token from the ambient environment
/// - the dispatcher (storage provisioning) client
/// - the invoker with the real log store and name resolver
pub async fn run(args: CliArgs) -> Result<()> {
    let params = params::load_from_path(&args.params)?;

    if args.dry_run {
        print_dry_run(&params);
        return Ok(());
    }

    // Read the credential once; everything downstream gets it injected.
    let token = ExecutionToken::from_env()?;

    let dispatcher = DispatcherClient::new(token.clone());
    let invoker = PipelineInvoker::new(
        RuntimeLayout::default(),
        LatchStorageClient::new(token),
        EnvExecutionName,
    );

    launch(&dispatcher, &invoker, &params).await
}

/// The two-stage workflow: provision the shared volume, then invoke the
/// pipeline engine against it.
///
/// Provisioning failure aborts before any command is assembled; engine
/// failure propagates after the invoker's cleanup phase has run.
pub async fn launch<P, S, N>(
    provisioner: &P,
    invoker: &PipelineInvoker<S, N>,
    params: &ParamSet,
) -> Result<()>
where
    P: StorageProvisioner,
    S: LogStore,
    N: ExecutionNameResolver,
{
    info!("provisioning shared storage volume");
    let volume = provisioner.provision_storage().await?;
    info!(volume = %volume, "shared storage volume provisioned");

    invoker.run(&volume, params).await
}

/// Simple dry-run output: the resolved engine invocation and the
/// environment overrides, with a placeholder volume.
fn print_dry_run(params: &ParamSet) {
    let layout = RuntimeLayout::default();
    let volume = VolumeHandle::new("<volume>");

    println!("epilaunch dry-run");
    println!();
    println!("command:");
    for token in build_command(&layout, params) {
        println!("  {token}");
    }
    println!();
    println!("environment overrides:");
    for (key, value) in environment_overrides(&layout, &volume) {
        println!("  {key}={value}");
    }
}
