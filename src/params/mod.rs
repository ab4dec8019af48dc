// src/params/mod.rs

//! Typed pipeline parameters: the static schema, bound value sets, the TOML
//! binding boundary, and the deterministic flag translation consumed by the
//! runtime when assembling the engine invocation.
//!
//! Everything here derives from the single [`schema::PIPELINE_PARAMS`]
//! table, so the binding boundary and the flag translator cannot drift
//! apart.

pub mod bind;
pub mod flags;
pub mod schema;
pub mod value;

pub use bind::{bind_table, load_from_path};
pub use flags::{flag_tokens, flags_for};
pub use schema::{descriptor, ParamDescriptor, ParamType, PIPELINE_PARAMS};
pub use value::{ParamSet, ParamValue};
