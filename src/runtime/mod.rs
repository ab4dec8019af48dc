// src/runtime/mod.rs

//! Engine runtime: working-file staging, invocation assembly, and the
//! subprocess protocol that runs the pipeline engine.

use std::path::PathBuf;

pub mod command;
pub mod invoker;
pub mod stage;

pub use command::{build_command, build_environment, environment_overrides};
pub use invoker::PipelineInvoker;
pub use stage::stage_working_files;

/// Fixed paths and engine tuning for one deployment.
///
/// `Default` carries the production constants; tests override individual
/// fields to point the invoker at temp directories and a stand-in engine
/// binary.
#[derive(Debug, Clone)]
pub struct RuntimeLayout {
    /// Local root whose contents are staged into the shared volume.
    pub host_root: PathBuf,
    /// Shared working directory backed by the provisioned volume.
    pub shared_dir: PathBuf,
    /// Pipeline engine executable.
    pub engine_bin: PathBuf,
    /// Pipeline entry script, resolved under `shared_dir`.
    pub entry_script: String,
    /// Engine execution profile.
    pub profile: String,
    /// Engine config file passed with `-c`.
    pub engine_config: String,
    /// Engine home directory (`NXF_HOME`).
    pub engine_home: PathBuf,
    /// Engine JVM and process-count tuning (`NXF_OPTS`).
    pub engine_opts: String,
    /// Run log file name, relative to `shared_dir`.
    pub log_file: String,
    /// Remote base path the run log is uploaded under.
    pub remote_log_base: String,
}

impl Default for RuntimeLayout {
    fn default() -> Self {
        Self {
            host_root: PathBuf::from("/root"),
            shared_dir: PathBuf::from("/nf-workdir"),
            engine_bin: PathBuf::from("/root/nextflow"),
            entry_script: "main.nf".to_string(),
            profile: "docker".to_string(),
            engine_config: "latch.config".to_string(),
            engine_home: PathBuf::from("/root/.nextflow"),
            engine_opts: "-Xms2048M -Xmx8G -XX:ActiveProcessorCount=4".to_string(),
            log_file: ".nextflow.log".to_string(),
            remote_log_base: "latch:///your_log_dir/nf_nf_core_epitopeprediction".to_string(),
        }
    }
}

impl RuntimeLayout {
    /// Absolute path of the run log inside the shared working directory.
    pub fn log_path(&self) -> PathBuf {
        self.shared_dir.join(&self.log_file)
    }
}
