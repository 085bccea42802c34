use crate::constants::{CHIME_ACCESS_KEY_ID, CHIME_SECRET_ACCESS_KEY, CHIME_SESSION_TOKEN};
use crate::Credential;
use async_trait::async_trait;
use chimectl_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `CHIME_ACCESS_KEY_ID`: the access key ID
/// - `CHIME_SECRET_ACCESS_KEY`: the secret access key
/// - `CHIME_SESSION_TOKEN`: the session token (optional)
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let access_key_id = envs.get(CHIME_ACCESS_KEY_ID);
        let secret_access_key = envs.get(CHIME_SECRET_ACCESS_KEY);

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential {
                access_key_id: ak.clone(),
                secret_access_key: sk.clone(),
                session_token: envs.get(CHIME_SESSION_TOKEN).cloned(),
                expires_in: None,
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chimectl_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (CHIME_ACCESS_KEY_ID.to_string(), "env_access_key".to_string()),
                (
                    CHIME_SECRET_ACCESS_KEY.to_string(),
                    "env_secret_key".to_string(),
                ),
            ]),
        });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .unwrap();
        assert_eq!(cred.access_key_id, "env_access_key");
        assert_eq!(cred.secret_access_key, "env_secret_key");
        assert!(cred.session_token.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_with_token() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (CHIME_ACCESS_KEY_ID.to_string(), "env_access_key".to_string()),
                (
                    CHIME_SECRET_ACCESS_KEY.to_string(),
                    "env_secret_key".to_string(),
                ),
                (CHIME_SESSION_TOKEN.to_string(), "env_token".to_string()),
            ]),
        });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .unwrap();
        assert_eq!(cred.session_token.as_deref(), Some("env_token"));

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_without_env() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv::default());

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
