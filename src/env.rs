//! Process environment lookups.
//!
//! Config layering reads `STOREFRONT_*` variables through [`Env`] so that
//! tests can hand in a fixed set of values via [`Env::mock()`] instead of
//! mutating the process environment.

use std::collections::HashMap;

/// Source of environment variables: the real process, or a fixed map.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the process environment.
    pub fn real() -> Self {
        Self { fixed: None }
    }

    /// Read only from the given pairs; nothing from the process leaks in.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            fixed: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.fixed {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Value of `name`, or `None` when it is unset or blank.
    ///
    /// `STOREFRONT_TOKEN=` in a CI job should not wipe a token from a
    /// config file, so blank values count as absent.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).ok().filter(|v| !v.trim().is_empty())
    }
}
