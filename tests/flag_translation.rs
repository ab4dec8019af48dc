// tests/flag_translation.rs

//! End-to-end checks of the parameter-to-flag translation and the
//! assembled engine command.

use epilaunch::params::{flags_for, ParamValue};
use epilaunch::runtime::{build_command, RuntimeLayout};
use epilaunch_test_utils::builders::ParamSetBuilder;

#[test]
fn input_file_with_defaults_emits_expected_flags() {
    // `input` bound to a file, everything else left at schema defaults.
    let params = ParamSetBuilder::minimal().build();
    let tokens = flags_for(&params);

    let input_pos = tokens.iter().position(|t| t == "--input").unwrap();
    assert_eq!(tokens[input_pos + 1], "/data/samples.csv");

    let genome_pos = tokens
        .iter()
        .position(|t| t == "--genome_reference")
        .unwrap();
    assert_eq!(tokens[genome_pos + 1], "grch37");

    // Optionals without a default stay absent.
    assert!(!tokens.iter().any(|t| t == "--email"));
    assert!(!tokens.iter().any(|t| t == "--multiqc_title"));
}

#[test]
fn boolean_flag_is_bare() {
    let params = ParamSetBuilder::minimal().with_bool("filter_self", true).build();
    let tokens = flags_for(&params);

    let pos = tokens.iter().position(|t| t == "--filter_self").unwrap();
    // Presence-only: the next token (if any) starts a new flag group.
    if let Some(next) = tokens.get(pos + 1) {
        assert!(next.starts_with("--"), "unexpected value token {next:?}");
    }
}

#[test]
fn false_and_absent_booleans_emit_nothing() {
    let params = ParamSetBuilder::minimal()
        .with_bool("wild_type", false)
        .build();
    let tokens = flags_for(&params);
    assert!(!tokens.iter().any(|t| t == "--wild_type"));
    assert!(!tokens.iter().any(|t| t == "--fasta_output"));
}

#[test]
fn file_parameters_emit_flag_then_path() {
    let params = ParamSetBuilder::minimal()
        .with_path("netmhcpan_path", "latch:///tools/netMHCpan-4.0.tar.gz")
        .build();
    let tokens = flags_for(&params);

    let pos = tokens.iter().position(|t| t == "--netmhcpan_path").unwrap();
    assert_eq!(tokens[pos + 1], "latch:///tools/netMHCpan-4.0.tar.gz");
}

#[test]
fn translation_is_deterministic() {
    let build = || {
        ParamSetBuilder::minimal()
            .with_bool("filter_self", true)
            .with_int("max_peptide_length", 12)
            .with_str("tools", "mhcflurry")
            .build()
    };
    assert_eq!(flags_for(&build()), flags_for(&build()));
}

#[test]
fn command_prefix_is_fixed_regardless_of_bindings() {
    let layout = RuntimeLayout::default();

    let sparse = ParamSetBuilder::minimal().build();
    let rich = ParamSetBuilder::minimal()
        .with_bool("filter_self", true)
        .with_str("email", "someone@example.org")
        .with_int("peptides_split_maxchunks", 50)
        .build();

    let prefix = [
        "/root/nextflow",
        "run",
        "/nf-workdir/main.nf",
        "-work-dir",
        "/nf-workdir",
        "-profile",
        "docker",
        "-c",
        "latch.config",
    ];
    assert_eq!(&build_command(&layout, &sparse)[..9], &prefix);
    assert_eq!(&build_command(&layout, &rich)[..9], &prefix);
}

#[test]
fn rebinding_to_absent_removes_the_flag() {
    let params = ParamSetBuilder::minimal().with_absent("tools").build();
    assert_eq!(params.get("tools"), Some(&ParamValue::Absent));
    assert!(!flags_for(&params).iter().any(|t| t == "--tools"));
}
