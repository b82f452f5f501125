use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::quadratic::DEFAULT_EPSILON;

/// User-tunable settings, read from TOML. Everything has a default so
/// running without a config file just works.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tolerance for classifying a near-zero discriminant as tangency.
    pub epsilon: f64,
    /// Default plot window for commands that don't pick their own.
    pub x_min: f64,
    pub x_max: f64,
    /// Curve sample count for charts and the `sample` command.
    pub samples: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            epsilon: DEFAULT_EPSILON,
            x_min: -10.0,
            x_max: 10.0,
            samples: 400,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.quadlab/quadlab.toml
    dirs_next::home_dir().map(|h| h.join(".quadlab").join("quadlab.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load settings from `path` when it exists; defaults otherwise.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(p) if p.exists() => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("Read config {}", p.display()))?;
            toml::from_str(&text).with_context(|| format!("Parse config {}", p.display()))
        }
        _ => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let s = load_settings(Some(Path::new("/nonexistent/quadlab.toml"))).unwrap();
        assert_eq!(s.samples, 400);
        assert_eq!(s.epsilon, DEFAULT_EPSILON);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("quadlab.toml");
        std::fs::write(&p, "epsilon = 1e-6\n").unwrap();
        let s = load_settings(Some(&p)).unwrap();
        assert_eq!(s.epsilon, 1e-6);
        assert_eq!(s.x_max, 10.0);
    }
}
