use crate::provide_credential::{EnvCredentialProvider, ProfileCredentialProvider};
use crate::Credential;
use async_trait::async_trait;
use cdpsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Environment variables
/// 2. Shared credentials file (`~/.cdp/credentials`)
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
            .push(ProfileCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
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
    use crate::constants::{CDP_ACCESS_KEY_ID, CDP_CREDENTIALS_FILE, CDP_PRIVATE_KEY};
    use cdpsign_core::StaticEnv;
    use cdpsign_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_credential_env_loader_without_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::new(),
            });

        let l = DefaultCredentialProvider::new();
        let x = l.provide_credential(&ctx).await.expect("load must succeed");
        assert!(x.is_none());
    }

    #[tokio::test]
    async fn test_credential_env_loader_with_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::from_iter([
                    (CDP_ACCESS_KEY_ID.to_string(), "access_key_id".to_string()),
                    (CDP_PRIVATE_KEY.to_string(), "private_key".to_string()),
                ]),
            });

        let l = DefaultCredentialProvider::new();
        let x = l.provide_credential(&ctx).await.expect("load must succeed");

        let x = x.expect("must load succeed");
        assert_eq!("access_key_id", x.access_key_id);
        assert_eq!("private_key", x.private_key);
    }

    #[tokio::test]
    async fn test_credential_profile_loader() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("credentials");
        std::fs::write(
            &path,
            "[default]\ncdp_access_key_id = file_access_key\ncdp_private_key = file_private_key\n",
        )?;

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::from_iter([(
                    CDP_CREDENTIALS_FILE.to_string(),
                    path.to_string_lossy().to_string(),
                )]),
            });

        let x = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("must load succeed");
        assert_eq!("file_access_key", x.access_key_id);
        assert_eq!("file_private_key", x.private_key);
        Ok(())
    }
}
