use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub links: LinksConfig,
    pub code: CodeConfig,
    pub document: DocumentConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LinksConfig {
    /// Open external (http/https) links in a new tab.
    pub external_new_tab: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            external_new_tab: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CodeConfig {
    /// Class prefix applied to the code element, e.g. `language-rust`.
    pub class_prefix: String,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            class_prefix: "language-".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct DocumentConfig {
    /// Wrap the rendered fragment in a complete HTML document.
    pub standalone: bool,
    pub title: String,
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    /// A file that exists but fails to parse also falls back to defaults,
    /// with a warning.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
