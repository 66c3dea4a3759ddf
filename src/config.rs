// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;

/// Inspector configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Namespace to inspect, all namespaces when unset
    pub watch_namespace: Option<String>,
    /// Exit with an error when any ingress carries invalid annotations
    pub fail_on_invalid: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let watch_namespace = lookup("WATCH_NAMESPACE").filter(|ns| !ns.is_empty());
        let fail_on_invalid = match lookup("FAIL_ON_INVALID") {
            Some(v) => v
                .parse()
                .with_context(|| format!("FAIL_ON_INVALID must be true or false, got '{}'", v))?,
            None => false,
        };

        Ok(Config {
            watch_namespace,
            fail_on_invalid,
        })
    }

    pub fn namespace(&self) -> Option<&str> {
        self.watch_namespace.as_deref()
    }
}
