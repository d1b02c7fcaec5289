//! Engine configuration that downstream crates can serialize/deserialize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which join algorithm a configured join should run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
    /// Correct for any comparator; quadratic.
    NestedLoop,
    /// Linear; only correct when every comparator is equality.
    #[default]
    Hash,
}

impl JoinStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinStrategy::NestedLoop => "nested_loop",
            JoinStrategy::Hash => "hash",
        }
    }
}

impl fmt::Display for JoinStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nested_loop" | "nested-loop" | "nestedloop" | "nlj" => Ok(JoinStrategy::NestedLoop),
            "hash" | "hash_join" | "hash-join" => Ok(JoinStrategy::Hash),
            other => Err(Error::Config(format!("unknown join strategy '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Strategy used by configured joins (`rels_operators::join::join_with_config`).
    pub join_strategy: JoinStrategy,

    /// Log shadowed build rows in hash joins at `warn` instead of `debug`.
    pub warn_on_duplicate_build_keys: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            join_strategy: JoinStrategy::Hash,
            warn_on_duplicate_build_keys: false,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `RELS_JOIN_STRATEGY`: `nested_loop` or `hash`
    /// - `RELS_WARN_DUPLICATE_BUILD_KEYS`: `1`/`true`/`yes` to enable
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("RELS_JOIN_STRATEGY") {
            if let Ok(v) = s.parse::<JoinStrategy>() {
                cfg.join_strategy = v;
            }
        }

        if let Ok(s) = std::env::var("RELS_WARN_DUPLICATE_BUILD_KEYS") {
            if let Some(v) = parse_flag(&s) {
                cfg.warn_on_duplicate_build_keys = v;
            }
        }

        cfg
    }

    /// Parse a JSON config document; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_join_strategy(mut self, strategy: JoinStrategy) -> Self {
        self.join_strategy = strategy;
        self
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
