use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data;
use crate::error::{Result, SbError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            board: BoardConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, sb_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("SB_CONFIG").ok().map(Into::into));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(sb_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = dirs::config_dir()
            .ok_or_else(|| SbError::MissingConfig("config directory not found".to_string()))?
            .join("sb/config.toml");
        Self::load_patch(&path)
    }

    fn load_project(sb_root: &Path) -> Result<Option<ConfigPatch>> {
        let path = sb_root.join("config.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SbError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SbError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.resolver {
            self.resolver.merge(patch);
        }
        if let Some(patch) = patch.board {
            self.board.merge(patch);
        }
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_string("SB_RESOURCE") {
            self.resolver.resource = Some(value);
        }
        if let Some(value) = env_u64("SB_RESOLVER_TIMEOUT_SECS") {
            self.resolver.timeout_secs = value;
        }
        if let Some(value) = env_string("SB_STORAGE_KEY") {
            self.storage.key = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Remote resource serving the canonical skill list as a JSON array of
    /// strings. When unset, sync resolves to the fallback list.
    pub resource: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resource: None,
            timeout_secs: 10,
        }
    }
}

impl ResolverConfig {
    fn merge(&mut self, patch: ResolverPatch) {
        if let Some(resource) = patch.resource {
            self.resource = Some(resource);
        }
        if let Some(timeout_secs) = patch.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub fallback: Vec<String>,
    pub placeholder: Vec<String>,
    pub developing: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            fallback: data::fallback_skills(),
            placeholder: data::placeholder_skills(),
            developing: data::developing_skills(),
        }
    }
}

impl BoardConfig {
    fn merge(&mut self, patch: BoardPatch) {
        if let Some(fallback) = patch.fallback {
            self.fallback = fallback;
        }
        if let Some(placeholder) = patch.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(developing) = patch.developing {
            self.developing = developing;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage key for the persisted order; namespaced so the entry cannot
    /// collide with other values sharing the same root.
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: "sb-skills-order".to_string(),
        }
    }
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(key) = patch.key {
            self.key = key;
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigPatch {
    resolver: Option<ResolverPatch>,
    board: Option<BoardPatch>,
    storage: Option<StoragePatch>,
}

#[derive(Debug, Deserialize)]
struct ResolverPatch {
    resource: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct BoardPatch {
    fallback: Option<Vec<String>>,
    placeholder: Option<Vec<String>>,
    developing: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct StoragePatch {
    key: Option<String>,
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_u64(name: &str) -> Option<u64> {
    env_string(name).and_then(|v| v.parse().ok())
}
