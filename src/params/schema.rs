// src/params/schema.rs

//! Static parameter schema for the epitope-prediction pipeline.
//!
//! One descriptor per pipeline input, in the order the engine invocation
//! emits them. Both the TOML binding boundary ([`crate::params::bind`]) and
//! the flag translator ([`crate::params::flags`]) walk this table, so the
//! accepted parameter set and the emitted flag set stay in lock-step by
//! construction.

/// How a parameter value is typed and rendered on the engine command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Free-form string scalar.
    Str,
    /// Integer scalar.
    Int,
    /// Presence-only flag. `true` emits the bare flag, `false` nothing.
    Bool,
    /// Reference to a file, local or remote.
    File,
    /// Reference to a directory. `output` marks it as a result sink rather
    /// than an input.
    Dir { output: bool },
}

/// Schema default for a parameter, when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
}

/// One entry of the parameter table.
#[derive(Debug, Clone, Copy)]
pub struct ParamDescriptor {
    /// Unique parameter key, also the engine flag name (`--<name>`).
    pub name: &'static str,
    pub ty: ParamType,
    /// Required parameters must be bound to a concrete value before launch.
    pub required: bool,
    pub default: Option<DefaultValue>,
    /// Grouping label for presentation; carried on the first parameter of
    /// each group, as in the upstream parameter documentation.
    pub section_title: Option<&'static str>,
    pub description: &'static str,
}

/// The full pipeline parameter table, in engine-invocation order.
pub const PIPELINE_PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor {
        name: "input",
        ty: ParamType::File,
        required: true,
        default: None,
        section_title: Some("Input/output options"),
        description: "Path to comma-separated file containing information about the samples in the experiment.",
    },
    ParamDescriptor {
        name: "outdir",
        ty: ParamType::Dir { output: true },
        required: true,
        default: None,
        section_title: None,
        description: "The output directory where the results will be saved. You have to use absolute paths to storage on Cloud infrastructure.",
    },
    ParamDescriptor {
        name: "email",
        ty: ParamType::Str,
        required: false,
        default: None,
        section_title: None,
        description: "Email address for completion summary.",
    },
    ParamDescriptor {
        name: "multiqc_title",
        ty: ParamType::Str,
        required: false,
        default: None,
        section_title: None,
        description: "MultiQC report title. Printed as page header, used for filename if not otherwise specified.",
    },
    ParamDescriptor {
        name: "genome_reference",
        ty: ParamType::Str,
        required: false,
        default: Some(DefaultValue::Str("grch37")),
        section_title: Some("Reference options"),
        description: "Specifies the Ensembl genome reference version that will be used.",
    },
    ParamDescriptor {
        name: "proteome",
        ty: ParamType::Str,
        required: false,
        default: None,
        section_title: None,
        description: "Specifies the reference proteome.",
    },
    ParamDescriptor {
        name: "filter_self",
        ty: ParamType::Bool,
        required: false,
        default: None,
        section_title: Some("Peptide prediction options"),
        description: "Filter against human proteome.",
    },
    ParamDescriptor {
        name: "max_peptide_length",
        ty: ParamType::Int,
        required: false,
        default: Some(DefaultValue::Int(11)),
        section_title: None,
        description: "Specifies the maximum peptide length.",
    },
    ParamDescriptor {
        name: "min_peptide_length",
        ty: ParamType::Int,
        required: false,
        default: Some(DefaultValue::Int(8)),
        section_title: None,
        description: "Specifies the minimum peptide length.",
    },
    ParamDescriptor {
        name: "max_peptide_length_class2",
        ty: ParamType::Int,
        required: false,
        default: Some(DefaultValue::Int(16)),
        section_title: None,
        description: "Specifies the maximum peptide length for MHC class II peptides.",
    },
    ParamDescriptor {
        name: "min_peptide_length_class2",
        ty: ParamType::Int,
        required: false,
        default: Some(DefaultValue::Int(15)),
        section_title: None,
        description: "Specifies the minimum peptide length for MHC class II peptides.",
    },
    ParamDescriptor {
        name: "tools",
        ty: ParamType::Str,
        required: false,
        default: Some(DefaultValue::Str("syfpeithi")),
        section_title: None,
        description: "Specifies the prediction tool(s) to use.",
    },
    ParamDescriptor {
        name: "tool_thresholds",
        ty: ParamType::Str,
        required: false,
        default: None,
        section_title: None,
        description: "Specifies tool-specific binder thresholds in a JSON file. This can be used to override the given default binder threshold values.",
    },
    ParamDescriptor {
        name: "use_affinity_thresholds",
        ty: ParamType::Bool,
        required: false,
        default: None,
        section_title: None,
        description: "Specifies the affinity metric instead of the rank metric used for determining whether a peptide is considered as a binder.",
    },
    ParamDescriptor {
        name: "wild_type",
        ty: ParamType::Bool,
        required: false,
        default: None,
        section_title: None,
        description: "Specifies whether wild-type sequences should be predicted.",
    },
    ParamDescriptor {
        name: "fasta_output",
        ty: ParamType::Bool,
        required: false,
        default: None,
        section_title: None,
        description: "Specifies that sequences of proteins, affected by provided variants, will be written to a FASTA file.",
    },
    ParamDescriptor {
        name: "show_supported_models",
        ty: ParamType::Bool,
        required: false,
        default: None,
        section_title: None,
        description: "Writes out supported prediction models.",
    },
    ParamDescriptor {
        name: "split_by_variants",
        ty: ParamType::Bool,
        required: false,
        default: None,
        section_title: Some("Run optimisation"),
        description: "Split VCF file into multiple files by number of variants.",
    },
    ParamDescriptor {
        name: "split_by_variants_size",
        ty: ParamType::Int,
        required: false,
        default: Some(DefaultValue::Int(0)),
        section_title: None,
        description: "Number of variants that should be written into one file. Default: number of variants divided by ten",
    },
    ParamDescriptor {
        name: "split_by_variants_distance",
        ty: ParamType::Int,
        required: false,
        default: Some(DefaultValue::Int(110000)),
        section_title: None,
        description: "Number of nucleotides between previous and current variant across split.",
    },
    ParamDescriptor {
        name: "peptides_split_maxchunks",
        ty: ParamType::Int,
        required: false,
        default: Some(DefaultValue::Int(100)),
        section_title: None,
        description: "Specifies the maximum number of peptide chunks.",
    },
    ParamDescriptor {
        name: "peptides_split_minchunksize",
        ty: ParamType::Int,
        required: false,
        default: Some(DefaultValue::Int(5000)),
        section_title: None,
        description: "Specifies the minimum number of peptides that should be written into one chunk.",
    },
    ParamDescriptor {
        name: "external_tools_meta",
        ty: ParamType::Str,
        required: false,
        default: None,
        section_title: Some("External software"),
        description: "Specifies the path to the JSON file with meta information on external prediction tools.",
    },
    ParamDescriptor {
        name: "netmhc_system",
        ty: ParamType::Str,
        required: false,
        default: Some(DefaultValue::Str("linux")),
        section_title: None,
        description: "Specifies the operating system in use (Linux or Darwin). This is only necessary if conda is used.",
    },
    ParamDescriptor {
        name: "netmhcpan_path",
        ty: ParamType::File,
        required: false,
        default: None,
        section_title: None,
        description: "To use the 'netmhcpan' tool, specify the path to the original software tarball for NetMHCpan 4.0 here.",
    },
    ParamDescriptor {
        name: "netmhc_path",
        ty: ParamType::File,
        required: false,
        default: None,
        section_title: None,
        description: "To use the 'netmhc' tool, specify the path to the original software tarball for NetMHC 4.0 here.",
    },
    ParamDescriptor {
        name: "netmhciipan_path",
        ty: ParamType::File,
        required: false,
        default: None,
        section_title: None,
        description: "To use the 'netmhciipan' tool, specify the path to the original software tarball for NetMHCIIpan 3.1 here.",
    },
    ParamDescriptor {
        name: "netmhcii_path",
        ty: ParamType::File,
        required: false,
        default: None,
        section_title: None,
        description: "To use the 'netmhcii' tool, specify the path to the original software tarball for NetMHCII 2.2 here.",
    },
    ParamDescriptor {
        name: "multiqc_methods_description",
        ty: ParamType::Str,
        required: false,
        default: None,
        section_title: Some("Generic options"),
        description: "Custom MultiQC yaml file containing HTML including a methods description.",
    },
];

/// Look up a descriptor by parameter name.
pub fn descriptor(name: &str) -> Option<&'static ParamDescriptor> {
    PIPELINE_PARAMS.iter().find(|d| d.name == name)
}
