use crate::constants::CHIMECTL_CONFIG;
use crate::Credential;
use async_trait::async_trait;
use chimectl_core::{Context, Error, ProvideCredential, Result};
use serde::Deserialize;

/// Default store location, relative to the user's home directory.
const DEFAULT_STORE_PATH: &str = "~/.config/chimectl/config.toml";

/// On-disk shape of the CLI's credential store.
#[derive(Debug, Default, Deserialize)]
struct StoreFile {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    session_token: Option<String>,
}

/// StoreCredentialProvider reads the CLI's TOML credential store.
///
/// The store path comes from the `CHIMECTL_CONFIG` environment variable,
/// falling back to `~/.config/chimectl/config.toml`. A missing store is not
/// an error; the provider simply yields nothing.
#[derive(Debug, Default, Clone)]
pub struct StoreCredentialProvider {
    path: Option<String>,
}

impl StoreCredentialProvider {
    /// Create a new StoreCredentialProvider using the default path rules.
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Override the store path, bypassing env and home-dir resolution.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    fn resolve_path(&self, ctx: &Context) -> Option<String> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }
        if let Some(path) = ctx.env_var(CHIMECTL_CONFIG) {
            return Some(path);
        }

        ctx.expand_home_dir(DEFAULT_STORE_PATH)
    }
}

#[async_trait]
impl ProvideCredential for StoreCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(path) = self.resolve_path(ctx) else {
            return Ok(None);
        };

        let content = match ctx.file_read_as_string(&path).await {
            Ok(content) => content,
            Err(err) => {
                log::debug!("credential store {path} not readable: {err}");
                return Ok(None);
            }
        };

        let store: StoreFile = toml::from_str(&content)
            .map_err(|e| Error::config_invalid(format!("malformed credential store {path}: {e}")))?;

        let (Some(ak), Some(sk)) = (store.access_key_id, store.secret_access_key) else {
            return Ok(None);
        };

        Ok(Some(Credential {
            access_key_id: ak,
            secret_access_key: sk,
            session_token: store.session_token,
            expires_in: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chimectl_core::{FileRead, StaticEnv};
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    struct StaticFileRead(HashMap<String, Vec<u8>>);

    #[async_trait]
    impl FileRead for StaticFileRead {
        async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| Error::unexpected(format!("no such file: {path}")))
        }
    }

    fn ctx_with_store(path: &str, content: &str) -> Context {
        Context::new()
            .with_file_read(StaticFileRead(HashMap::from([(
                path.to_string(),
                content.as_bytes().to_vec(),
            )])))
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::from([(CHIMECTL_CONFIG.to_string(), path.to_string())]),
            })
    }

    #[tokio::test]
    async fn test_store_credential_provider() -> anyhow::Result<()> {
        let ctx = ctx_with_store(
            "/tmp/config.toml",
            r#"
access_key_id = "store_access_key"
secret_access_key = "store_secret_key"
session_token = "store_token"
"#,
        );

        let cred = StoreCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .unwrap();
        assert_eq!(cred.access_key_id, "store_access_key");
        assert_eq!(cred.secret_access_key, "store_secret_key");
        assert_eq!(cred.session_token.as_deref(), Some("store_token"));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_store_yields_nothing() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([(CHIMECTL_CONFIG.to_string(), "/nope.toml".to_string())]),
        });

        let cred = StoreCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_incomplete_store_yields_nothing() -> anyhow::Result<()> {
        let ctx = ctx_with_store("/tmp/config.toml", r#"access_key_id = "only-half""#);

        let cred = StoreCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_store_is_an_error() {
        let ctx = ctx_with_store("/tmp/config.toml", "not = [ valid");

        let err = StoreCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), chimectl_core::ErrorKind::ConfigInvalid);
    }

    #[tokio::test]
    async fn test_home_dir_fallback_path() -> anyhow::Result<()> {
        let ctx = Context::new()
            .with_file_read(StaticFileRead(HashMap::from([(
                "/home/chime/.config/chimectl/config.toml".to_string(),
                br#"
access_key_id = "home_key"
secret_access_key = "home_secret"
"#
                .to_vec(),
            )])))
            .with_env(StaticEnv {
                home_dir: Some("/home/chime".into()),
                envs: HashMap::new(),
            });

        let cred = StoreCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .unwrap();
        assert_eq!(cred.access_key_id, "home_key");

        Ok(())
    }
}
