use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::completion::ClientSettings;
use crate::consts::{API_KEY_ENV, CONFIG_PATH_ENV};
use crate::utils::debug_log;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) max_tokens: Option<u32>,
    #[serde(default)]
    pub(crate) temperature: Option<f32>,
    #[serde(default)]
    pub(crate) referer: Option<String>,
    #[serde(default)]
    pub(crate) app_title: Option<String>,
    #[serde(default)]
    pub(crate) output_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

/// Streamlit-style secrets file, read from `.streamlit/secrets.toml`
#[derive(Debug, Default, Deserialize)]
struct Secrets {
    #[serde(rename = "OPENROUTER_API_KEY", default)]
    openrouter_api_key: Option<String>,
}

/// Where the API key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiKeySource {
    Environment,
    SecretsFile,
    ConfigFile,
}

impl ApiKeySource {
    pub(crate) fn description(&self) -> &'static str {
        match self {
            ApiKeySource::Environment => "environment variable",
            ApiKeySource::SecretsFile => ".streamlit/secrets.toml",
            ApiKeySource::ConfigFile => "config file",
        }
    }
}

/// A config file the user named explicitly should exist
fn warn_if_missing(path: &Path) {
    if !path.exists() {
        eprintln!(
            "Warning: Config file {} not found, trying default locations",
            path.display()
        );
    }
}

impl Config {
    /// Load the first config file that parses. `explicit` (from `--config`)
    /// is tried before the env override and the default locations.
    pub(crate) fn load(explicit: Option<&Path>) -> Self {
        let mut paths = Vec::new();
        if let Some(path) = explicit {
            warn_if_missing(path);
            paths.push(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            warn_if_missing(&path);
            paths.push(path);
        }
        paths.extend(Self::get_config_paths());
        Self::load_from(&paths)
    }

    fn load_from(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        debug_log(format_args!("Loaded config from {}", path.display()));
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/syllabus-gen/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("syllabus-gen").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("syllabus-gen").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.syllabus-gen.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".syllabus-gen.toml"));
        }

        paths
    }

    /// Resolve the bearer token: environment, then secrets file, then config
    pub(crate) fn resolve_api_key(&self) -> Option<(String, ApiKeySource)> {
        if let Some(key) = non_blank(std::env::var(API_KEY_ENV).ok()) {
            return Some((key, ApiKeySource::Environment));
        }
        if let Some(key) = load_secrets_key(Path::new(".streamlit").join("secrets.toml").as_path()) {
            return Some((key, ApiKeySource::SecretsFile));
        }
        non_blank(self.api_key.clone()).map(|key| (key, ApiKeySource::ConfigFile))
    }

    /// Client settings with config overrides applied over the defaults
    pub(crate) fn client_settings(&self, api_key: String) -> ClientSettings {
        let mut settings = ClientSettings::with_api_key(api_key);
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            settings.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            settings.temperature = temperature;
        }
        if let Some(referer) = &self.referer {
            settings.referer = referer.clone();
        }
        if let Some(title) = &self.app_title {
            settings.app_title = title.clone();
        }
        settings
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn load_secrets_key(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    match toml::from_str::<Secrets>(&content) {
        Ok(secrets) => non_blank(secrets.openrouter_api_key),
        Err(e) => {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}
