use crate::provide_credential::{EnvCredentialProvider, StoreCredentialProvider};
use crate::Credential;
use async_trait::async_trait;
use chimectl_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider tries the default resolution chain.
///
/// Resolution order:
///
/// 1. Environment variables (`CHIME_ACCESS_KEY_ID`, ...)
/// 2. The CLI's credential store (`CHIMECTL_CONFIG` or
///    `~/.config/chimectl/config.toml`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(StoreCredentialProvider::new());

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CHIME_ACCESS_KEY_ID, CHIME_SECRET_ACCESS_KEY};
    use chimectl_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_default_provider_without_sources() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv::default());
        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_default_provider_prefers_env() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (CHIME_ACCESS_KEY_ID.to_string(), "env_key".to_string()),
                (CHIME_SECRET_ACCESS_KEY.to_string(), "env_secret".to_string()),
            ]),
        });

        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .unwrap();
        assert_eq!(cred.access_key_id, "env_key");

        Ok(())
    }
}
