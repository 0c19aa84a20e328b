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

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// TOML file with a `[[users]]` array, offered for mention completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_path: Option<PathBuf>,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub mentions: MentionsConfig,
}

/// Class names for rendered markup. An empty string means "no wrapper".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub bold_class: String,
    pub italic_class: String,
    pub mention_class: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bold_class: "bold".to_string(),
            italic_class: "italic".to_string(),
            mention_class: String::new(),
        }
    }
}

impl RenderConfig {
    pub fn bold(&self) -> Option<&str> {
        non_empty(&self.bold_class)
    }

    pub fn italic(&self) -> Option<&str> {
        non_empty(&self.italic_class)
    }

    pub fn mention(&self) -> Option<&str> {
        non_empty(&self.mention_class)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionsConfig {
    /// Most users listed for a non-empty search.
    pub search_limit: usize,
}

impl Default for MentionsConfig {
    fn default() -> Self {
        Self { search_limit: 5 }
    }
}

impl Config {
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

        // Expand shell variables and tilde in the users directory path
        config.users_path = config
            .users_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file, falling back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
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

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/notemark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/notemark/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.users_path, None);
        assert_eq!(config.render.bold(), Some("bold"));
        assert_eq!(config.render.italic(), Some("italic"));
        assert_eq!(config.render.mention(), None);
        assert_eq!(config.mentions.search_limit, 5);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[render]
mention_class = "tag"

[mentions]
search_limit = 8
"#,
        )
        .unwrap();

        assert_eq!(config.render.bold(), Some("bold"));
        assert_eq!(config.render.mention(), Some("tag"));
        assert_eq!(config.mentions.search_limit, 8);
    }

    #[test]
    fn test_blank_class_disables_wrapper() {
        let config: Config = toml::from_str(
            r#"
[render]
bold_class = "  "
"#,
        )
        .unwrap();
        assert_eq!(config.render.bold(), None);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            users_path: Some(PathBuf::from("/tmp/users.toml")),
            render: RenderConfig {
                mention_class: "mention".to_string(),
                ..RenderConfig::default()
            },
            mentions: MentionsConfig { search_limit: 3 },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/users.toml");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/users.toml"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/users.toml");
        assert_eq!(Config::expand_path(&path).unwrap(), path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "users_path = [").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            users_path: Some(PathBuf::from("/tmp/users.toml")),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_users_path_env_var_expanded_on_load() {
        unsafe {
            env::set_var("NOTEMARK_TEST_ROOT", "/custom/root");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "users_path = \"$NOTEMARK_TEST_ROOT/users.toml\"\n").unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded.users_path, Some(PathBuf::from("/custom/root/users.toml")));

        unsafe {
            env::remove_var("NOTEMARK_TEST_ROOT");
        }
    }
}
