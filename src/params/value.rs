// src/params/value.rs

//! Bound parameter values for one execution.

use std::collections::BTreeMap;

use crate::errors::{EpilaunchError, Result};
use crate::params::schema::{descriptor, DefaultValue, ParamDescriptor, ParamType, PIPELINE_PARAMS};

/// A concrete value bound to one parameter.
///
/// The tag decides how the value is rendered on the engine command line;
/// see [`crate::params::flags::flag_tokens`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Optional parameter left unbound. Emits no tokens.
    Absent,
    Bool(bool),
    Int(i64),
    Str(String),
    /// File or directory reference, local or remote.
    Path(String),
}

impl ParamValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, ParamValue::Absent)
    }

    /// Whether this value is acceptable for a parameter of the given type.
    ///
    /// `Absent` is acceptable everywhere; whether it is *allowed* for a
    /// required parameter is checked separately at launch time.
    fn matches(&self, ty: ParamType) -> bool {
        match (self, ty) {
            (ParamValue::Absent, _) => true,
            (ParamValue::Bool(_), ParamType::Bool) => true,
            (ParamValue::Int(_), ParamType::Int) => true,
            (ParamValue::Str(_), ParamType::Str) => true,
            (ParamValue::Path(_), ParamType::File | ParamType::Dir { .. }) => true,
            _ => false,
        }
    }
}

impl From<DefaultValue> for ParamValue {
    fn from(d: DefaultValue) -> Self {
        match d {
            DefaultValue::Str(s) => ParamValue::Str(s.to_string()),
            DefaultValue::Int(i) => ParamValue::Int(i),
        }
    }
}

/// The full set of bound values for one execution, one per descriptor.
///
/// Every descriptor in [`PIPELINE_PARAMS`] always has a binding: parameters
/// start at their schema default (or `Absent`) and can only be re-bound to
/// type-matching values. Iteration order is the schema's declaration order,
/// which keeps flag emission deterministic.
#[derive(Debug, Clone)]
pub struct ParamSet {
    values: BTreeMap<&'static str, ParamValue>,
}

impl ParamSet {
    /// A value set with every parameter at its schema default.
    pub fn with_defaults() -> Self {
        let values = PIPELINE_PARAMS
            .iter()
            .map(|d| {
                let value = d.default.map(ParamValue::from).unwrap_or(ParamValue::Absent);
                (d.name, value)
            })
            .collect();
        Self { values }
    }

    /// Bind a value to a named parameter.
    ///
    /// Rejects names not present in the schema and values whose tag does
    /// not match the descriptor's type.
    pub fn bind(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let desc = descriptor(name).ok_or_else(|| {
            EpilaunchError::ParamError(format!("unknown parameter '{name}'"))
        })?;

        if !value.matches(desc.ty) {
            return Err(EpilaunchError::ParamError(format!(
                "parameter '{name}' expects {:?}, got {value:?}",
                desc.ty
            )));
        }

        self.values.insert(desc.name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Iterate `(descriptor, value)` pairs in schema declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static ParamDescriptor, &ParamValue)> {
        PIPELINE_PARAMS.iter().map(|d| {
            let value = self
                .values
                .get(d.name)
                .expect("every descriptor has a binding by construction");
            (d, value)
        })
    }

    /// Check that every required parameter is bound to a concrete value.
    pub fn ensure_required(&self) -> Result<()> {
        for (desc, value) in self.iter() {
            if desc.required && value.is_absent() {
                return Err(EpilaunchError::ParamError(format!(
                    "required parameter '{}' is not set",
                    desc.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_bound_at_construction() {
        let set = ParamSet::with_defaults();
        assert_eq!(
            set.get("genome_reference"),
            Some(&ParamValue::Str("grch37".to_string()))
        );
        assert_eq!(set.get("max_peptide_length"), Some(&ParamValue::Int(11)));
        assert_eq!(set.get("email"), Some(&ParamValue::Absent));
        assert_eq!(set.get("input"), Some(&ParamValue::Absent));
    }

    #[test]
    fn bind_rejects_unknown_parameter() {
        let mut set = ParamSet::with_defaults();
        let err = set
            .bind("not_a_param", ParamValue::Str("x".into()))
            .unwrap_err();
        assert!(err.to_string().contains("unknown parameter"));
    }

    #[test]
    fn bind_rejects_type_mismatch() {
        let mut set = ParamSet::with_defaults();
        let err = set
            .bind("max_peptide_length", ParamValue::Str("eleven".into()))
            .unwrap_err();
        assert!(err.to_string().contains("expects"));
    }

    #[test]
    fn bind_accepts_matching_value_and_absent() {
        let mut set = ParamSet::with_defaults();
        set.bind("input", ParamValue::Path("/data/samples.csv".into()))
            .unwrap();
        set.bind("filter_self", ParamValue::Bool(true)).unwrap();
        set.bind("tools", ParamValue::Absent).unwrap();
        assert_eq!(set.get("tools"), Some(&ParamValue::Absent));
    }

    #[test]
    fn iteration_follows_schema_order() {
        let set = ParamSet::with_defaults();
        let names: Vec<_> = set.iter().map(|(d, _)| d.name).collect();
        let schema_names: Vec<_> = PIPELINE_PARAMS.iter().map(|d| d.name).collect();
        assert_eq!(names, schema_names);
    }

    #[test]
    fn ensure_required_flags_missing_input() {
        let mut set = ParamSet::with_defaults();
        let err = set.ensure_required().unwrap_err();
        assert!(err.to_string().contains("'input'"));

        set.bind("input", ParamValue::Path("/data/samples.csv".into()))
            .unwrap();
        set.bind("outdir", ParamValue::Path("latch:///outputs".into()))
            .unwrap();
        set.ensure_required().unwrap();
    }
}
