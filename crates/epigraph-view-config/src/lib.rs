use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON epigraph records.
    pub records_path: PathBuf,
    /// Colour semantic spans and show their tooltips.
    #[serde(default = "default_show_markers")]
    pub show_markers: bool,
}

fn default_show_markers() -> bool {
    true
}

impl Config {
    pub fn new(records_path: impl Into<PathBuf>) -> Self {
        Self {
            records_path: records_path.into(),
            show_markers: default_show_markers(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the records path
        config.records_path =
            Self::expand_path(&config.records_path).unwrap_or(config.records_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Updates the marker setting and writes the config back to `config_path`.
    pub fn save_show_markers_to_path<P: AsRef<Path>>(
        &mut self,
        show_markers: bool,
        config_path: P,
    ) -> anyhow::Result<()> {
        self.show_markers = show_markers;
        self.save_to_path(config_path)
    }

    pub fn save_show_markers(&mut self, show_markers: bool) -> anyhow::Result<()> {
        self.save_show_markers_to_path(show_markers, Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/epigraph-view");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/epigraph-view/config.toml"));
    }

    #[test]
    fn test_show_markers_defaults_on() {
        let config: Config = toml::from_str(r#"records_path = "/data/records""#).unwrap();

        assert!(config.show_markers);
        assert_eq!(config.records_path, PathBuf::from("/data/records"));
    }

    #[test]
    fn test_show_markers_can_be_turned_off() {
        let config: Config = toml::from_str(
            r#"
records_path = "/data/records"
show_markers = false
"#,
        )
        .unwrap();

        assert!(!config.show_markers);
    }

    #[test]
    fn test_missing_records_path_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "show_markers = true\n").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/test/records")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/records"));
    }

    #[test]
    fn test_expand_path_leaves_plain_paths_alone() {
        for path in ["/absolute/path", "relative/path"] {
            assert_eq!(Config::expand_path(Path::new(path)), Some(PathBuf::from(path)));
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_creates_parent_directories_and_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let mut test_config = Config::new("/tmp/test-records");
        test_config.show_markers = false;

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_marker_toggle_is_written_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "records_path = \"/data/records\"\n").unwrap();
        let mut config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert!(config.show_markers);

        config.save_show_markers_to_path(false, &config_file).unwrap();

        let reloaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert!(!reloaded.show_markers);
        assert_eq!(reloaded.records_path, PathBuf::from("/data/records"));
    }

    #[test]
    fn test_env_var_in_records_path_is_expanded_on_load() {
        unsafe {
            env::set_var("EPIGRAPH_VIEW_TEST_ROOT", "/custom/corpus");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "records_path = \"$EPIGRAPH_VIEW_TEST_ROOT/records\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.records_path, PathBuf::from("/custom/corpus/records"));

        unsafe {
            env::remove_var("EPIGRAPH_VIEW_TEST_ROOT");
        }
    }
}
