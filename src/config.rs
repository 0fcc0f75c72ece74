//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$ATTACHVIEW_CONFIG` (environment variable)
//! 2. `~/.config/attachview/config.toml` (Linux/macOS)
//!    `%APPDATA%\attachview\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::render::PreviewOptions;
use crate::resolve::{ApiFileResolver, FileResolver, PassthroughResolver};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
    /// Preview rendering defaults.
    pub render: RenderConfig,
    /// Download link resolution.
    pub resolver: ResolverConfig,
    /// Terminal display settings.
    pub display: DisplayConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Override cache directory for logs.
    pub cache_dir: Option<PathBuf>,
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

/// Preview rendering defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render images without the metadata wrapper.
    pub simple: bool,
    /// Spacing after each slot.
    pub margin_bottom: u32,
    /// Text appended to every metadata block.
    pub additional_item: Option<String>,
}

/// Download link resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Base url of the file API. Urls are used as-is when unset.
    pub api_url: Option<String>,
}

/// Terminal display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum display width of attachment names before truncation.
    pub name_width: usize,
}

// ── Default implementations ─────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { name_width: 32 }
    }
}

impl Config {
    /// Preview options derived from the `[render]` section.
    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            simple: self.render.simple,
            margin_bottom: self.render.margin_bottom,
            scroll_bottom: None,
            additional_item: self.render.additional_item.clone(),
        }
    }

    /// File resolver described by the `[resolver]` section.
    pub fn file_resolver(&self) -> Box<dyn FileResolver> {
        match self.resolver.api_url.as_deref() {
            Some(base) if !base.is_empty() => Box::new(ApiFileResolver::new(base)),
            _ => Box::new(PassthroughResolver),
        }
    }
}

// ── Load / save ─────────────────────────────────────────────────

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    match config_file_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// Load configuration from an explicit path, falling back to defaults.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(cfg) => {
                tracing::info!(path = %path.display(), "Loaded config");
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse config, using defaults"
                );
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read config file, using defaults"
            );
            Config::default()
        }
    }
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config(config: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), "Saved config");
    Ok(())
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("ATTACHVIEW_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|d| d.join("attachview").join("config.toml"))
}

/// Return the cache directory for logs.
pub fn cache_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.general.cache_dir {
        return dir.clone();
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("attachview")
}

/// Return the log file path.
pub fn log_file_path(config: &Config) -> PathBuf {
    cache_dir(config).join("attachview.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.general.log_level, "warn");
        assert!(!cfg.render.simple);
        assert_eq!(cfg.render.margin_bottom, 0);
        assert_eq!(cfg.resolver.api_url, None);
        assert_eq!(cfg.display.name_width, 32);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let partial = r#"
[render]
simple = true
margin_bottom = 8

[resolver]
api_url = "https://api.example.com"
"#;
        let cfg: Config = toml::from_str(partial).expect("parse partial");
        assert!(cfg.render.simple);
        assert_eq!(cfg.render.margin_bottom, 8);
        assert_eq!(cfg.general.log_level, "warn");
        assert_eq!(cfg.display.name_width, 32);

        let options = cfg.preview_options();
        assert!(options.simple);
        assert_eq!(options.margin_bottom, 8);
        assert_eq!(
            cfg.file_resolver().resolve("k.pdf"),
            "https://api.example.com/read-file?key=k.pdf"
        );
    }

    #[test]
    fn test_default_resolver_passes_through() {
        assert_eq!(Config::default().file_resolver().resolve("k.pdf"), "k.pdf");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.render.additional_item = Some("via inbox".into());
        cfg.display.name_width = 20;
        save_config(&cfg, &path).expect("save");

        let loaded = load_config_from(&path);
        assert_eq!(loaded.render.additional_item.as_deref(), Some("via inbox"));
        assert_eq!(loaded.display.name_width, 20);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "render = [not valid").expect("write");
        let cfg = load_config_from(&path);
        assert_eq!(cfg.general.log_level, "warn");
    }

    #[test]
    fn test_log_file_path_uses_cache_override() {
        let mut cfg = Config::default();
        cfg.general.cache_dir = Some(PathBuf::from("/tmp/av-cache"));
        assert_eq!(
            log_file_path(&cfg),
            PathBuf::from("/tmp/av-cache/attachview.log")
        );
    }
}
