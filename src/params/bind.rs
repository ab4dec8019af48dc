// src/params/bind.rs

//! Binding boundary: TOML parameter file to a typed [`ParamSet`].
//!
//! The parameter file is flat, one key per schema entry:
//!
//! ```toml
//! input = "latch:///experiments/run1/samples.csv"
//! outdir = "latch:///experiments/run1/results"
//! filter_self = true
//! max_peptide_length = 12
//! ```
//!
//! Keys not in the schema and values of the wrong type are rejected here,
//! before anything is provisioned or executed.

use std::path::Path;

use crate::errors::{EpilaunchError, Result};
use crate::params::schema::{descriptor, ParamDescriptor, ParamType};
use crate::params::value::{ParamSet, ParamValue};

/// Load a parameter file from a given path and bind it against the schema.
///
/// This is the recommended entry point for the rest of the application:
/// reads TOML, applies schema defaults, coerces and type-checks every entry,
/// and requires the pipeline's required parameters to be present.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ParamSet> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let table: toml::Table = toml::from_str(&contents)?;
    bind_table(&table)
}

/// Bind an already-parsed TOML table against the schema.
pub fn bind_table(table: &toml::Table) -> Result<ParamSet> {
    let mut set = ParamSet::with_defaults();

    for (key, value) in table {
        let desc = descriptor(key).ok_or_else(|| {
            EpilaunchError::ParamError(format!("unknown parameter '{key}' in parameter file"))
        })?;
        set.bind(key, coerce(desc, value)?)?;
    }

    set.ensure_required()?;
    Ok(set)
}

/// Coerce one TOML value according to its descriptor's type.
fn coerce(desc: &ParamDescriptor, value: &toml::Value) -> Result<ParamValue> {
    let coerced = match desc.ty {
        ParamType::Str => value.as_str().map(|s| ParamValue::Str(s.to_string())),
        ParamType::Int => value.as_integer().map(ParamValue::Int),
        ParamType::Bool => value.as_bool().map(ParamValue::Bool),
        ParamType::File | ParamType::Dir { .. } => {
            value.as_str().map(|s| ParamValue::Path(s.to_string()))
        }
    };

    coerced.ok_or_else(|| {
        EpilaunchError::ParamError(format!(
            "parameter '{}' expects {}, got {}",
            desc.name,
            expected_toml_type(desc.ty),
            actual_toml_type(value)
        ))
    })
}

fn expected_toml_type(ty: ParamType) -> &'static str {
    match ty {
        ParamType::Str => "a string",
        ParamType::Int => "an integer",
        ParamType::Bool => "a boolean",
        ParamType::File | ParamType::Dir { .. } => "a path string",
    }
}

fn actual_toml_type(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "a string",
        toml::Value::Integer(_) => "an integer",
        toml::Value::Float(_) => "a float",
        toml::Value::Boolean(_) => "a boolean",
        toml::Value::Datetime(_) => "a datetime",
        toml::Value::Array(_) => "an array",
        toml::Value::Table(_) => "a table",
    }
}
