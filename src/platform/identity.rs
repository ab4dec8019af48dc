// src/platform/identity.rs

//! Resolution of the current execution's human-readable name.
//!
//! Name resolution is failable and non-fatal: the invoker only uses it to
//! compose the log upload destination, and skips the upload when no name is
//! available.

use crate::platform::EXECUTION_TOKEN_VAR;

/// Trait abstracting where the execution name comes from.
pub trait ExecutionNameResolver: Send + Sync {
    /// The name of the current run, or `None` if it cannot be resolved.
    fn execution_name(&self) -> Option<String>;
}

/// Production resolver. The platform names runs after the execution
/// identity value, so this reads the same variable the token comes from.
#[derive(Debug, Clone, Default)]
pub struct EnvExecutionName;

impl ExecutionNameResolver for EnvExecutionName {
    fn execution_name(&self) -> Option<String> {
        std::env::var(EXECUTION_TOKEN_VAR)
            .ok()
            .filter(|s| !s.is_empty())
    }
}
