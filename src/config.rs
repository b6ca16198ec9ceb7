use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{Result, SrtShiftError};
use crate::offset::Offset;

/// File looked up in the current directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "srtshift.toml";

fn default_write_bom() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shift: ShiftConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default offset, overridden per component on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftConfig {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Prefix output with a UTF-8 byte-order mark
    #[serde(default = "default_write_bom")]
    pub write_bom: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the daily rolling log file; console only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            write_bom: default_write_bom(),
        }
    }
}

impl ShiftConfig {
    /// Validate the configured components into an [`Offset`].
    pub fn offset(&self) -> Result<Offset> {
        Offset::new(self.hours, self.minutes, self.seconds, self.milliseconds)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SrtShiftError::Config(format!("Failed to read config file {}: {}", path.display(), e)))?;

        Ok(toml::from_str(&content)?)
    }

    /// Refuses to write a shift that every later run would reject.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.shift.offset()?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| SrtShiftError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| SrtShiftError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Load `path` if given, else `srtshift.toml` from `dir` if present, else defaults.
    pub fn locate<P: AsRef<Path>>(path: Option<P>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.exists() {
                    Self::from_file(candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.shift, ShiftConfig::default());
        assert!(config.output.write_bom);
        assert!(config.logging.directory.is_none());
        assert!(config.shift.offset().unwrap().is_zero());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[shift]\nseconds = -2\n").unwrap();
        assert_eq!(config.shift.seconds, -2);
        assert_eq!(config.shift.minutes, 0);
        assert!(config.output.write_bom);
    }

    #[test]
    fn test_out_of_range_shift_is_rejected_on_use() {
        let config: Config = toml::from_str("[shift]\nmilliseconds = 1500\n").unwrap();
        assert!(matches!(
            config.shift.offset(),
            Err(SrtShiftError::ShiftTooLarge { unit: "milliseconds", .. })
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("srtshift.toml");

        let mut config = Config::default();
        config.shift.minutes = 3;
        config.output.write_bom = false;
        config.logging.directory = Some(PathBuf::from("logs"));
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.shift.minutes, 3);
        assert!(!loaded.output.write_bom);
        assert_eq!(loaded.logging.directory, Some(PathBuf::from("logs")));
    }

    #[test]
    fn test_save_rejects_out_of_range_shift() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("srtshift.toml");

        let mut config = Config::default();
        config.shift.milliseconds = 5000;
        assert!(matches!(
            config.save_to_file(&path),
            Err(SrtShiftError::ShiftTooLarge { unit: "milliseconds", .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_locate_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::locate(None::<&Path>, dir.path()).unwrap();
        assert!(config.output.write_bom);

        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[output]\nwrite_bom = false\n").unwrap();
        let config = Config::locate(None::<&Path>, dir.path()).unwrap();
        assert!(!config.output.write_bom);
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::locate(Some(dir.path().join("nope.toml")), dir.path()).unwrap_err();
        assert!(matches!(err, SrtShiftError::Config(_)));
    }
}
