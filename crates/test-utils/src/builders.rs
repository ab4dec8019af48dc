#![allow(dead_code)]

use epilaunch::params::{ParamSet, ParamValue};

/// Builder for `ParamSet` to simplify test setup.
///
/// Starts from schema defaults; every `with_*` call panics on unknown names
/// or type mismatches, since those are test bugs.
pub struct ParamSetBuilder {
    set: ParamSet,
}

impl ParamSetBuilder {
    pub fn new() -> Self {
        Self {
            set: ParamSet::with_defaults(),
        }
    }

    /// Schema defaults plus the two required references bound to dummy
    /// paths, the smallest launchable value set.
    pub fn minimal() -> Self {
        Self::new()
            .with_path("input", "/data/samples.csv")
            .with_path("outdir", "latch:///outputs")
    }

    pub fn with_str(mut self, name: &str, value: &str) -> Self {
        self.set
            .bind(name, ParamValue::Str(value.to_string()))
            .expect("binding string parameter in test builder");
        self
    }

    pub fn with_int(mut self, name: &str, value: i64) -> Self {
        self.set
            .bind(name, ParamValue::Int(value))
            .expect("binding integer parameter in test builder");
        self
    }

    pub fn with_bool(mut self, name: &str, value: bool) -> Self {
        self.set
            .bind(name, ParamValue::Bool(value))
            .expect("binding boolean parameter in test builder");
        self
    }

    pub fn with_path(mut self, name: &str, value: &str) -> Self {
        self.set
            .bind(name, ParamValue::Path(value.to_string()))
            .expect("binding path parameter in test builder");
        self
    }

    pub fn with_absent(mut self, name: &str) -> Self {
        self.set
            .bind(name, ParamValue::Absent)
            .expect("unbinding parameter in test builder");
        self
    }

    pub fn build(self) -> ParamSet {
        self.set
    }
}

impl Default for ParamSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
