//! Configuration system for transcode.
//!
//! Loads config from:
//! 1. Global: ~/.config/normalize/transcode.toml
//! 2. Per-project: .normalize/transcode.toml (overrides global)
//!
//! Example transcode.toml:
//! ```toml
//! [convert]
//! targets = ["java", "cpp"]
//! on_malformed = "skip"
//! report = true
//! ```

use normalize_transcode::{MalformedPolicy, target_ids};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Conversion defaults. Unset keys fall through to the next layer.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConvertConfig {
    /// Targets used when none are given on the command line.
    pub targets: Option<Vec<String>>,
    /// Policy for lines whose capture pattern is incomplete.
    pub on_malformed: Option<MalformedPolicy>,
    /// Whether to print lines that produced no output.
    pub report: Option<bool>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TranscodeConfig {
    pub convert: ConvertConfig,
}

impl TranscodeConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/normalize/transcode.toml,
    /// then merges with per-project config from .normalize/transcode.toml.
    pub fn load(root: &Path) -> Self {
        Self::load_from(Self::global_config_path().as_deref(), root)
    }

    fn load_from(global_path: Option<&Path>, root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global) = global_path.and_then(Self::load_file) {
            config = config.merge(global);
        }

        let project_path = root.join(".normalize").join("transcode.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("normalize").join("transcode.toml"))
    }

    /// Load config from a file path. Missing files are not an error.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring invalid config: {}", err);
                None
            }
        }
    }

    /// Merge another config into this one. Keys set in `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            convert: ConvertConfig {
                targets: other.convert.targets.or(self.convert.targets),
                on_malformed: other.convert.on_malformed.or(self.convert.on_malformed),
                report: other.convert.report.or(self.convert.report),
            },
        }
    }

    /// Default targets: configured ones, or every registered target.
    ///
    /// An empty `targets` list counts as unset.
    pub fn targets(&self) -> Vec<String> {
        match &self.convert.targets {
            Some(targets) if !targets.is_empty() => targets.clone(),
            Some(_) => {
                tracing::warn!("config sets empty `targets`, using every target");
                Self::all_targets()
            }
            None => Self::all_targets(),
        }
    }

    fn all_targets() -> Vec<String> {
        target_ids().into_iter().map(String::from).collect()
    }

    pub fn malformed(&self) -> MalformedPolicy {
        self.convert.on_malformed.unwrap_or_default()
    }

    pub fn report(&self) -> bool {
        self.convert.report.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        std::fs::create_dir_all(dir).unwrap();
        let path = dir.join("transcode.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let dir = TempDir::new().unwrap();
        let config = TranscodeConfig::load_from(None, dir.path());
        assert_eq!(config, TranscodeConfig::default());
        assert_eq!(config.malformed(), MalformedPolicy::Abort);
        assert!(!config.report());
        assert_eq!(config.targets(), ["javascript", "java", "cpp"]);
    }

    #[test]
    fn test_load_project_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(".normalize"),
            r#"
[convert]
targets = ["cpp"]
on_malformed = "skip"
"#,
        );

        let config = TranscodeConfig::load_from(None, dir.path());
        assert_eq!(config.targets(), ["cpp"]);
        assert_eq!(config.malformed(), MalformedPolicy::Skip);
        assert!(!config.report()); // default
    }

    #[test]
    fn test_project_overrides_global_per_key() {
        let global_dir = TempDir::new().unwrap();
        let global = write_config(
            global_dir.path(),
            r#"
[convert]
targets = ["java"]
report = true
"#,
        );

        let project = TempDir::new().unwrap();
        write_config(
            &project.path().join(".normalize"),
            r#"
[convert]
targets = ["javascript"]
"#,
        );

        let config = TranscodeConfig::load_from(Some(&global), project.path());
        assert_eq!(config.targets(), ["javascript"]);
        assert!(config.report()); // from global
    }

    #[test]
    fn test_empty_targets_means_every_target() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(".normalize"),
            r#"
[convert]
targets = []
"#,
        );

        let config = TranscodeConfig::load_from(None, dir.path());
        assert_eq!(config.targets(), ["javascript", "java", "cpp"]);
    }

    #[test]
    fn test_invalid_config_is_ignored() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(".normalize"),
            r#"
[convert]
on_malformed = "explode"
"#,
        );

        let config = TranscodeConfig::load_from(None, dir.path());
        assert_eq!(config.malformed(), MalformedPolicy::Abort);
    }
}
