//! The local credential store.
//!
//! A TOML file holding the credential triple, loaded once per invocation
//! and saved only when a `config set` mutates it. The store is passed to
//! whoever needs it; nothing in the process reads it through a global.

use anyhow::{bail, Context as _};
use chimectl_core::{Env, OsEnv};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The keys the store accepts.
pub const KEYS: &[&str] = &["access_key_id", "secret_access_key", "session_token"];

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret_access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_token: Option<String>,
}

/// TOML-backed key-value store for the credential triple.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    values: StoreValues,
}

impl ConfigStore {
    /// Resolve the store path: `CHIMECTL_CONFIG` wins, otherwise
    /// `~/.config/chimectl/config.toml`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        if let Some(path) = OsEnv.var("CHIMECTL_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let home = OsEnv
            .home_dir()
            .context("cannot locate a home directory for the config store")?;
        Ok(home.join(".config").join("chimectl").join("config.toml"))
    }

    /// Load the store from `path`. A missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)
                .with_context(|| format!("malformed config store at {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreValues::default(),
            Err(e) => {
                return Err(
                    anyhow::Error::new(e).context(format!("cannot read {}", path.display()))
                );
            }
        };

        Ok(Self { path, values })
    }

    /// Persist the store to its path, creating parent directories as needed.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("cannot write {}", self.path.display()))
    }

    /// The path this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set one value. Unknown keys are rejected.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let slot = match key {
            "access_key_id" => &mut self.values.access_key_id,
            "secret_access_key" => &mut self.values.secret_access_key,
            "session_token" => &mut self.values.session_token,
            _ => bail!("unknown config key `{key}` (expected one of: {})", KEYS.join(", ")),
        };
        *slot = Some(value.to_string());
        Ok(())
    }

    /// Get one value. Unknown keys are rejected; an unset key is `None`.
    pub fn get(&self, key: &str) -> anyhow::Result<Option<&str>> {
        let slot = match key {
            "access_key_id" => &self.values.access_key_id,
            "secret_access_key" => &self.values.secret_access_key,
            "session_token" => &self.values.session_token,
            _ => bail!("unknown config key `{key}` (expected one of: {})", KEYS.join(", ")),
        };
        Ok(slot.as_deref())
    }

    /// All (key, value) pairs in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("access_key_id", self.values.access_key_id.as_deref()),
            ("secret_access_key", self.values.secret_access_key.as_deref()),
            ("session_token", self.values.session_token.as_deref()),
        ]
    }
}
