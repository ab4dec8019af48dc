// src/runtime/command.rs

//! Assembly of the engine invocation and its environment.
//!
//! The token sequence is the bit-exact contract the engine depends on:
//! fixed prefix first, then one flag group per parameter in schema order.

use std::collections::HashMap;

use crate::params::{flags_for, ParamSet};
use crate::platform::VolumeHandle;
use crate::runtime::RuntimeLayout;

/// Full engine command as an ordered token sequence, executable first.
pub fn build_command(layout: &RuntimeLayout, params: &ParamSet) -> Vec<String> {
    let mut cmd = vec![
        layout.engine_bin.display().to_string(),
        "run".to_string(),
        layout.shared_dir.join(&layout.entry_script).display().to_string(),
        "-work-dir".to_string(),
        layout.shared_dir.display().to_string(),
        "-profile".to_string(),
        layout.profile.clone(),
        "-c".to_string(),
        layout.engine_config.clone(),
    ];
    cmd.extend(flags_for(params));
    cmd
}

/// The fixed variable overrides applied on top of the ambient environment.
pub fn environment_overrides(
    layout: &RuntimeLayout,
    volume: &VolumeHandle,
) -> Vec<(String, String)> {
    vec![
        ("NXF_HOME".to_string(), layout.engine_home.display().to_string()),
        ("NXF_OPTS".to_string(), layout.engine_opts.clone()),
        ("K8S_STORAGE_CLAIM_NAME".to_string(), volume.to_string()),
        ("NXF_DISABLE_CHECK_LATEST".to_string(), "true".to_string()),
    ]
}

/// Ambient process environment plus the fixed overrides.
pub fn build_environment(
    layout: &RuntimeLayout,
    volume: &VolumeHandle,
) -> HashMap<String, String> {
    let mut env: HashMap<String, String> = std::env::vars().collect();
    env.extend(environment_overrides(layout, volume));
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;
    use std::path::PathBuf;

    fn minimal_params() -> ParamSet {
        let mut set = ParamSet::with_defaults();
        set.bind("input", ParamValue::Path("/data/samples.csv".into()))
            .unwrap();
        set.bind("outdir", ParamValue::Path("latch:///outputs".into()))
            .unwrap();
        set
    }

    #[test]
    fn fixed_prefix_comes_first_in_order() {
        let layout = RuntimeLayout::default();
        let cmd = build_command(&layout, &minimal_params());
        assert_eq!(
            &cmd[..9],
            &[
                "/root/nextflow",
                "run",
                "/nf-workdir/main.nf",
                "-work-dir",
                "/nf-workdir",
                "-profile",
                "docker",
                "-c",
                "latch.config",
            ]
        );
    }

    #[test]
    fn parameter_flags_follow_the_prefix() {
        let layout = RuntimeLayout::default();
        let cmd = build_command(&layout, &minimal_params());
        assert_eq!(&cmd[9..13], &["--input", "/data/samples.csv", "--outdir", "latch:///outputs"]);
    }

    #[test]
    fn prefix_respects_layout_overrides() {
        let layout = RuntimeLayout {
            engine_bin: PathBuf::from("/opt/engine"),
            shared_dir: PathBuf::from("/scratch"),
            ..RuntimeLayout::default()
        };
        let cmd = build_command(&layout, &minimal_params());
        assert_eq!(cmd[0], "/opt/engine");
        assert_eq!(cmd[2], "/scratch/main.nf");
        assert_eq!(cmd[4], "/scratch");
    }

    #[test]
    fn overrides_carry_volume_and_engine_tuning() {
        let layout = RuntimeLayout::default();
        let volume = VolumeHandle::new("pvc-42");
        let overrides = environment_overrides(&layout, &volume);
        assert_eq!(
            overrides,
            vec![
                ("NXF_HOME".to_string(), "/root/.nextflow".to_string()),
                (
                    "NXF_OPTS".to_string(),
                    "-Xms2048M -Xmx8G -XX:ActiveProcessorCount=4".to_string()
                ),
                ("K8S_STORAGE_CLAIM_NAME".to_string(), "pvc-42".to_string()),
                ("NXF_DISABLE_CHECK_LATEST".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn environment_keeps_ambient_variables() {
        let layout = RuntimeLayout::default();
        let env = build_environment(&layout, &VolumeHandle::new("pvc-42"));
        // PATH is present in any test environment and must survive.
        assert!(env.contains_key("PATH"));
        assert_eq!(env.get("K8S_STORAGE_CLAIM_NAME").map(String::as_str), Some("pvc-42"));
    }
}
