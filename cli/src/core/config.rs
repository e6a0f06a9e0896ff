//! # faqbot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Loads, merges and validates configuration. Settings come from several
//! sources, highest precedence first:
//!
//! 1. Command-line flags and environment variables (`--delay-ms` /
//!    `FAQBOT_DELAY_MS`, `--knowledge` / `FAQBOT_KNOWLEDGE`), applied with
//!    `Config::apply_overrides`
//! 2. An explicit file passed with `--config`, which replaces 3 and 4
//! 3. Project-specific `.faqbot.toml` in the current directory or ancestors
//! 4. User-specific `<config dir>/faqbot/config.toml`
//! 5. Default values defined in the code
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [dispatcher]
//! response_delay_ms = 0
//!
//! [knowledge]
//! path = "~/faq/knowledge.toml"
//!
//! [session]
//! show_welcome = false
//! ```
//!
use crate::core::error::{FaqbotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// The effective configuration after all layers are merged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub dispatcher: DispatcherConfig,
    pub knowledge: KnowledgeConfig,
    pub session: SessionConfig,
}

/// Settings for the response dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Pause before each processed reply, in milliseconds. `0` disables it.
    pub response_delay_ms: u64,
}

/// Where the knowledge base comes from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    /// Optional TOML knowledge file (can use ~). Built-in data is used when unset.
    pub path: Option<String>,
}

/// Settings for the interactive chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Start each session with the assistant's welcome message.
    pub show_welcome: bool,
}

/// A single configuration file as written. Keys left out stay `None`, so a
/// layer only overrides what it actually sets.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    dispatcher: DispatcherFile,
    #[serde(default)]
    knowledge: KnowledgeConfig,
    #[serde(default)]
    session: SessionFile,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct DispatcherFile {
    response_delay_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct SessionFile {
    show_welcome: Option<bool>,
}

impl ConfigFile {
    /// Fills every unset key from `lower`.
    fn or(self, lower: ConfigFile) -> ConfigFile {
        ConfigFile {
            dispatcher: DispatcherFile {
                response_delay_ms: self
                    .dispatcher
                    .response_delay_ms
                    .or(lower.dispatcher.response_delay_ms),
            },
            knowledge: KnowledgeConfig {
                path: self.knowledge.path.or(lower.knowledge.path),
            },
            session: SessionFile {
                show_welcome: self.session.show_welcome.or(lower.session.show_welcome),
            },
        }
    }

    /// Resolves unset keys to their built-in defaults.
    fn resolve(self) -> Config {
        Config {
            dispatcher: DispatcherConfig {
                response_delay_ms: self
                    .dispatcher
                    .response_delay_ms
                    .unwrap_or_else(default_response_delay_ms),
            },
            knowledge: self.knowledge,
            session: SessionConfig {
                show_welcome: self
                    .session
                    .show_welcome
                    .unwrap_or_else(default_show_welcome),
            },
        }
    }
}

fn default_response_delay_ms() -> u64 {
    500
}
fn default_show_welcome() -> bool {
    true
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_welcome: default_show_welcome(),
        }
    }
}

impl DispatcherConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

/// Values given on the command line (or via environment) that win over files.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub delay_ms: Option<u64>,
    pub knowledge: Option<PathBuf>,
}

impl Config {
    /// Applies command-line overrides, then re-validates.
    pub fn apply_overrides(mut self, overrides: &Overrides) -> Result<Self> {
        if let Some(ms) = overrides.delay_ms {
            debug!("Overriding response delay: {} ms", ms);
            self.dispatcher.response_delay_ms = ms;
        }
        if let Some(path) = &overrides.knowledge {
            debug!("Overriding knowledge file: {}", path.display());
            self.knowledge.path = Some(path.to_string_lossy().into_owned());
        }
        expand_config_paths(&mut self)?;
        validate_config(&self).context("Configuration validation failed")?;
        Ok(self)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".faqbot.toml";

/// # Load Configuration (`load_config`)
///
/// With `explicit` set, reads only that file. Otherwise merges the user and
/// project files over the defaults. Paths are expanded and the result is
/// validated either way.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?.resolve()
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config, project_config)
        }
    };
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "faqbot", "faqbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.faqbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.faqbot.toml`; stops at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Merges the user and project layers; any key the project file sets wins.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    match project {
        Some(project) => project.or(user).resolve(),
        None => user.resolve(),
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(path) = &config.knowledge.path {
        let expanded = shellexpand::tilde(path).into_owned();
        debug!("Expanded knowledge path: {}", expanded);
        config.knowledge.path = Some(expanded);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if let Some(path) = &config.knowledge.path {
        let kb_path = PathBuf::from(path);
        if !kb_path.exists() {
            return Err(anyhow!(FaqbotError::Config(format!(
                "Knowledge file '{}' does not exist.",
                kb_path.display()
            ))));
        }
        if !kb_path.is_file() {
            return Err(anyhow!(FaqbotError::Config(format!(
                "Knowledge path '{}' exists but is not a file.",
                kb_path.display()
            ))));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [dispatcher]
            response_delay_ms = 0

            [knowledge]
            path = "~/faq/knowledge.toml"
        "#;

        let file: ConfigFile = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(file.session.show_welcome, None);
        let config = file.resolve();

        assert_eq!(config.dispatcher.response_delay_ms, 0);
        assert_eq!(config.dispatcher.response_delay(), Duration::ZERO);
        assert_eq!(
            config.knowledge.path.as_deref(),
            Some("~/faq/knowledge.toml")
        ); // Not yet expanded
        assert!(config.session.show_welcome); // Default
    }

    #[test]
    fn test_defaults() {
        let config = toml::from_str::<ConfigFile>("").unwrap().resolve();
        assert_eq!(config, Config::default());
        assert_eq!(config.dispatcher.response_delay(), Duration::from_millis(500));
        assert!(config.knowledge.path.is_none());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<ConfigFile, _> =
            toml::from_str("[dispatcher]\nthreshold = 0.5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            knowledge: KnowledgeConfig {
                path: Some("~/kb.toml".to_string()),
            },
            ..Default::default()
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.knowledge.path.as_deref(),
            Some(home_dir.join("kb.toml").to_string_lossy().as_ref())
        );
    }

    #[test]
    fn test_merge_project_wins_over_user() {
        let user: ConfigFile = toml::from_str(
            "[dispatcher]\nresponse_delay_ms = 250\n[knowledge]\npath = \"/user/kb.toml\"\n",
        )
        .unwrap();
        let project: ConfigFile = toml::from_str(
            "[knowledge]\npath = \"/project/kb.toml\"\n[session]\nshow_welcome = false\n",
        )
        .unwrap();

        let merged = merge_configs(Some(user), Some(project));
        assert_eq!(merged.dispatcher.response_delay_ms, 250); // Project left it unset
        assert_eq!(merged.knowledge.path.as_deref(), Some("/project/kb.toml"));
        assert!(!merged.session.show_welcome);
    }

    #[test]
    fn test_merge_project_setting_default_value_still_wins() {
        let user: ConfigFile = toml::from_str(
            "[dispatcher]\nresponse_delay_ms = 0\n[session]\nshow_welcome = false\n",
        )
        .unwrap();
        let project: ConfigFile = toml::from_str(
            "[dispatcher]\nresponse_delay_ms = 500\n[session]\nshow_welcome = true\n",
        )
        .unwrap();

        let merged = merge_configs(Some(user), Some(project));
        assert_eq!(merged.dispatcher.response_delay_ms, 500);
        assert!(merged.session.show_welcome);
    }

    #[test]
    fn test_merge_without_files_gives_defaults() {
        assert_eq!(merge_configs(None, None), Config::default());

        let user: ConfigFile = toml::from_str("[session]\nshow_welcome = false\n").unwrap();
        let merged = merge_configs(Some(user), None);
        assert!(!merged.session.show_welcome);
        assert_eq!(merged.dispatcher.response_delay_ms, 500);
    }

    #[test]
    fn test_find_project_config_stops_at_git() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.path().join("repo");
        let nested = repo.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir(repo.join(".git")).unwrap();

        // The file above the repository root is not picked up.
        assert_eq!(find_project_config_path(&nested), None);

        fs::write(repo.join("a").join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(repo.join("a").join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().unwrap();
        let kb_path = dir.path().join("kb.toml");
        fs::write(&kb_path, "fallbacks = [\"fb\"]\n").unwrap();
        let cfg_path = dir.path().join("faqbot.toml");
        fs::write(
            &cfg_path,
            format!(
                "[dispatcher]\nresponse_delay_ms = 10\n[knowledge]\npath = {:?}\n",
                kb_path.to_string_lossy()
            ),
        )
        .unwrap();

        let config = load_config(Some(&cfg_path)).unwrap();
        assert_eq!(config.dispatcher.response_delay_ms, 10);
        assert_eq!(
            config.knowledge.path.as_deref(),
            Some(kb_path.to_string_lossy().as_ref())
        );
    }

    #[test]
    fn test_validate_missing_knowledge_file() {
        let config = Config {
            knowledge: KnowledgeConfig {
                path: Some("/definitely/not/here.toml".into()),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_knowledge_path_is_dir() {
        let dir = tempdir().unwrap();
        let config = Config {
            knowledge: KnowledgeConfig {
                path: Some(dir.path().to_string_lossy().into_owned()),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("is not a file"));
    }

    #[test]
    fn test_apply_overrides() {
        let overrides = Overrides {
            delay_ms: Some(0),
            knowledge: None,
        };
        let config = Config::default().apply_overrides(&overrides).unwrap();
        assert_eq!(config.dispatcher.response_delay_ms, 0);

        let bad = Overrides {
            delay_ms: None,
            knowledge: Some(PathBuf::from("/no/such/kb.toml")),
        };
        assert!(Config::default().apply_overrides(&bad).is_err());
    }
}
