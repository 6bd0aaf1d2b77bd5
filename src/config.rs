use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::core::{Policy, SourceLayout};

pub const CONFIG_FILE_NAME: &str = ".bundlegenrc.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_root", alias = "i18nDir")]
    pub root: String,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
    #[serde(default = "default_hidden_prefix")]
    pub hidden_prefix: String,
    /// Extra translation-set code -> site code entries, merged over the built-in map.
    #[serde(default)]
    pub code_map: BTreeMap<String, String>,
    /// Extra `[old, new]` author renames, applied after the built-in ones.
    #[serde(default)]
    pub renames: Vec<(String, String)>,
    /// Extra message keys whose named placeholders are flattened to `%s`.
    #[serde(default)]
    pub plain_format: Vec<String>,
}

fn default_root() -> String {
    "./i18n".to_string()
}

fn default_source_extension() -> String {
    "json".to_string()
}

fn default_output_extension() -> String {
    "py".to_string()
}

fn default_hidden_prefix() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            source_extension: default_source_extension(),
            output_extension: default_output_extension(),
            hidden_prefix: default_hidden_prefix(),
            code_map: BTreeMap::new(),
            renames: Vec::new(),
            plain_format: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("root", &self.root),
            ("sourceExtension", &self.source_extension),
            ("outputExtension", &self.output_extension),
            ("hiddenPrefix", &self.hidden_prefix),
        ] {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }

        for ext in [&self.source_extension, &self.output_extension] {
            if ext.starts_with('.') {
                bail!("Extensions are written without a leading dot: \"{}\"", ext);
            }
        }

        if self.source_extension == self.output_extension {
            bail!(
                "'sourceExtension' and 'outputExtension' must differ (both \"{}\")",
                self.source_extension
            );
        }

        for (old, new) in &self.renames {
            if old == new {
                bail!("Rename in 'renames' maps \"{}\" to itself", old);
            }
        }

        Ok(())
    }

    /// Directory layout, with `root_override` (from the command line) taking precedence.
    pub fn layout(&self, root_override: Option<&Path>) -> SourceLayout {
        let root = root_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.root));

        SourceLayout {
            root,
            source_extension: self.source_extension.clone(),
            output_extension: self.output_extension.clone(),
            hidden_prefix: self.hidden_prefix.clone(),
        }
    }

    /// Built-in policy tables extended with the configured entries.
    pub fn policy(&self) -> Policy {
        let mut policy = Policy::default();
        policy
            .code_map
            .extend(self.code_map.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        policy
            .renames
            .extend(self.renames.iter().map(|(o, n)| (o.as_str(), n.as_str())));
        policy.plain_format.extend(self.plain_format.iter().cloned());
        policy
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, if one was found.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
