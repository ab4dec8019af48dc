// src/runtime/invoker.rs

//! Pipeline engine invocation protocol.
//!
//! A single linear procedure per execution:
//!
//! 1. stage working files into the shared volume
//! 2. translate parameters and assemble the engine command
//! 3. construct the environment (volume claim, engine tuning)
//! 4. run the engine as a child process and wait for it
//! 5. always attempt the run-log upload, success or failure
//!
//! Step 5 is cleanup: its own failures (missing log, unresolvable run name,
//! upload error) are diagnostics only and never replace the primary result
//! from step 4.

use std::collections::HashMap;
use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::{EpilaunchError, Result};
use crate::params::ParamSet;
use crate::platform::storage::remote_join;
use crate::platform::{ExecutionNameResolver, LogStore, VolumeHandle};
use crate::runtime::{build_command, build_environment, stage_working_files, RuntimeLayout};

/// Runs the engine for one execution.
pub struct PipelineInvoker<S: LogStore, N: ExecutionNameResolver> {
    layout: RuntimeLayout,
    log_store: S,
    names: N,
}

impl<S: LogStore, N: ExecutionNameResolver> PipelineInvoker<S, N> {
    pub fn new(layout: RuntimeLayout, log_store: S, names: N) -> Self {
        Self {
            layout,
            log_store,
            names,
        }
    }

    /// Run the full invocation protocol for one execution.
    pub async fn run(&self, volume: &VolumeHandle, params: &ParamSet) -> Result<()> {
        info!(
            src = %self.layout.host_root.display(),
            dest = %self.layout.shared_dir.display(),
            "staging working files into shared volume"
        );
        stage_working_files(&self.layout.host_root, &self.layout.shared_dir)?;

        let cmd = build_command(&self.layout, params);
        let env = build_environment(&self.layout, volume);

        info!(cmd = %cmd.join(" "), "launching pipeline engine");

        let run_result = self.execute(&cmd, &env).await;

        // Cleanup phase: runs on both the success and the failure path.
        self.upload_run_log(run_result.is_err()).await;

        run_result
    }

    /// Spawn the engine process and wait for it to exit.
    async fn execute(&self, cmd: &[String], env: &HashMap<String, String>) -> Result<()> {
        let Some((program, args)) = cmd.split_first() else {
            return Err(EpilaunchError::ConfigError(
                "empty engine command".to_string(),
            ));
        };

        let mut child = Command::new(program)
            .args(args)
            .env_clear()
            .envs(env)
            .current_dir(&self.layout.shared_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("spawning pipeline engine '{program}'"))?;

        // Forward engine output to structured logging: stdout at info,
        // stderr at debug so buffers never fill.
        if let Some(stdout) = child.stdout.take() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    info!(target: "engine", "{line}");
                }
            });
        }
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    debug!(target: "engine", "stderr: {line}");
                }
            });
        }

        let status = child
            .wait()
            .await
            .context("waiting for pipeline engine process")?;

        let code = status.code().unwrap_or(-1);
        info!(exit_code = code, success = status.success(), "pipeline engine exited");

        if status.success() {
            Ok(())
        } else {
            Err(EpilaunchError::EngineExit(code))
        }
    }

    /// Best-effort upload of the engine run log.
    ///
    /// Never fails: every exit path is a diagnostic. The skip when the run
    /// name cannot be resolved is logged louder when the engine also
    /// failed, so a log-scraping monitor can alert on the dual failure.
    async fn upload_run_log(&self, engine_failed: bool) {
        let log_path = self.layout.log_path();

        if !log_path.exists() {
            debug!(path = %log_path.display(), "no engine run log found, skipping upload");
            return;
        }

        let Some(name) = self.names.execution_name() else {
            if engine_failed {
                warn!("skipping log upload for failed run, could not resolve execution name");
            } else {
                info!("skipping log upload, could not resolve execution name");
            }
            return;
        };

        let remote = remote_join(&self.layout.remote_log_base, &[&name, "nextflow.log"]);
        info!(remote = %remote, "uploading engine run log");

        if let Err(err) = self.log_store.upload(&remote, &log_path).await {
            warn!(error = %err, remote = %remote, "engine run log upload failed");
        }
    }
}
