//! Crate configuration (§6.3): the one recognized knob is whether
//! [`crate::cb`] is allowed to fork its two sibling recursive calls across
//! the `rayon` thread pool.
//!
//! Modeled on the teacher's `project::config` module: a small `serde`
//! struct loadable from TOML, with `#[serde(default)]` fields so partial
//! configs are valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the coprime-base routines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoprimeBaseConfig {
    #[serde(default)]
    pub parallel: ParallelMode,
}

/// Whether [`crate::cb`]'s two sibling recursive calls may run concurrently.
///
/// Rayon's own global thread pool governs how many OS threads are
/// available; this only toggles whether `cb` is allowed to fork at all, and
/// at what slice length it stops bothering (below `min_len`, task overhead
/// would dominate — the same rationale §5 gives for not parallelizing the
/// other routines).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParallelMode {
    #[default]
    Serial,
    Parallel {
        min_len: usize,
    },
}

impl CoprimeBaseConfig {
    /// Parses a `CoprimeBaseConfig` from a TOML document.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// The default: no forking.
    pub fn serial() -> Self {
        CoprimeBaseConfig {
            parallel: ParallelMode::Serial,
        }
    }

    /// Forks `cb`'s sibling calls once a slice reaches `min_len` elements.
    pub fn parallel(min_len: usize) -> Self {
        CoprimeBaseConfig {
            parallel: ParallelMode::Parallel { min_len },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_serial() {
        let config = CoprimeBaseConfig::default();
        assert!(matches!(config.parallel, ParallelMode::Serial));
    }

    #[test]
    fn parses_parallel_from_toml() {
        let config = CoprimeBaseConfig::from_toml_str(
            r#"
            [parallel]
            type = "parallel"
            min_len = 64
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.parallel,
            ParallelMode::Parallel { min_len: 64 }
        ));
    }

    #[test]
    fn empty_toml_falls_back_to_default() {
        let config = CoprimeBaseConfig::from_toml_str("").unwrap();
        assert!(matches!(config.parallel, ParallelMode::Serial));
    }
}
