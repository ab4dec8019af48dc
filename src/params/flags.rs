// src/params/flags.rs

//! Translation from bound parameter values to engine command-line tokens.
//!
//! The token sequence is an external contract the engine depends on, so the
//! translation is a single exhaustive match over the value tag and emits
//! whole flag groups only: zero tokens, one presence flag, or a flag
//! followed by exactly one value token. The same value set always produces
//! the same sequence.

use crate::params::value::{ParamSet, ParamValue};

/// Tokens for a single parameter.
pub fn flag_tokens(name: &str, value: &ParamValue) -> Vec<String> {
    let flag = format!("--{name}");
    match value {
        ParamValue::Absent => vec![],
        ParamValue::Bool(true) => vec![flag],
        ParamValue::Bool(false) => vec![],
        ParamValue::Int(i) => vec![flag, i.to_string()],
        ParamValue::Str(s) => vec![flag, s.clone()],
        ParamValue::Path(p) => vec![flag, p.clone()],
    }
}

/// Tokens for the whole value set, one flag group per parameter in schema
/// declaration order.
pub fn flags_for(params: &ParamSet) -> Vec<String> {
    params
        .iter()
        .flat_map(|(desc, value)| flag_tokens(desc.name, value))
        .collect()
}
