use crate::errors::{AppError, AppResult};
use crate::models::JobColor;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level keys every configuration file is expected to carry.
pub const CONFIG_KEYS: [&str; 7] = [
    "shift_start",
    "shift_end",
    "lunch_break",
    "lunch_start",
    "jobs",
    "color_output",
    "separator_char",
];

/// A job as stored in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<JobColor>,
}

impl JobEntry {
    fn new(name: &str, color: JobColor) -> Self {
        Self {
            name: name.to_string(),
            color: Some(color),
        }
    }
}

/// Default form values used when the CLI does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_shift_start")]
    pub shift_start: String,
    #[serde(default = "default_shift_end")]
    pub shift_end: String,
    #[serde(default = "default_lunch_break")]
    pub lunch_break: bool,
    #[serde(default = "default_lunch_start")]
    pub lunch_start: String,
    #[serde(default = "default_jobs")]
    pub jobs: Vec<JobEntry>,
    #[serde(default = "default_color_output")]
    pub color_output: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_shift_start() -> String {
    "06:30".to_string()
}
fn default_shift_end() -> String {
    "10:00".to_string()
}
fn default_lunch_break() -> bool {
    true
}
fn default_lunch_start() -> String {
    "08:00".to_string()
}
fn default_jobs() -> Vec<JobEntry> {
    vec![
        JobEntry::new("225-037", JobColor::Indigo),
        JobEntry::new("225-038", JobColor::Emerald),
        JobEntry::new("225-039", JobColor::Rose),
        JobEntry::new("225-040", JobColor::Sky),
    ]
}
fn default_color_output() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shift_start: default_shift_start(),
            shift_end: default_shift_end(),
            lunch_break: default_lunch_break(),
            lunch_start: default_lunch_start(),
            jobs: default_jobs(),
            color_output: default_color_output(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftsplit")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftsplit")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftsplit.conf")
    }

    /// Config path to use: the `--config` override if given, else the default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Write the default configuration to `path` unless a file is already
    /// there. Returns `true` when a file was written.
    pub fn init(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save(path)?;
        Ok(true)
    }

    /// Keys from [`CONFIG_KEYS`] that the file at `path` does not define.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_conf(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("{}_shiftsplit.conf", name));
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = temp_conf("cfg_missing");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_is_completed_with_defaults() {
        let path = temp_conf("cfg_partial");
        fs::write(&path, "shift_start: \"07:00\"\nlunch_break: false\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.shift_start, "07:00");
        assert!(!cfg.lunch_break);
        assert_eq!(cfg.shift_end, "10:00");
        assert_eq!(cfg.jobs.len(), 4);

        let missing = Config::missing_keys(&path).unwrap();
        assert!(missing.contains(&"jobs"));
        assert!(!missing.contains(&"shift_start"));
    }

    #[test]
    fn init_does_not_overwrite() {
        let path = temp_conf("cfg_init");
        assert!(Config::init(&path).unwrap());
        assert!(!Config::init(&path).unwrap());
        assert!(Config::missing_keys(&path).unwrap().is_empty());
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let path = temp_conf("cfg_invalid");
        fs::write(&path, "jobs: [ {name: 1, color: magenta} ]\n").unwrap();
        assert!(matches!(Config::load(&path), Err(AppError::Config(_))));
    }
}
