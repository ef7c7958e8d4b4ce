use crate::{constants::*, Credential};
use async_trait::async_trait;
use cdpsign_core::{Context, Error, ProvideCredential, Result};
use ini::Ini;
use log::debug;

/// ProfileCredentialProvider loads CDP credentials from the shared
/// credentials file.
///
/// The file is `~/.cdp/credentials` unless `with_credentials_file()` or
/// `CDP_CREDENTIALS_FILE` says otherwise:
///
/// ```ini
/// [default]
/// cdp_access_key_id = 8e3bc7a0-...
/// cdp_private_key = Mzjg58S93/qdg0HuVP6PsLSRDTe+fQZ5++v/mkUUx4k=
/// ```
///
/// The profile to use is determined by:
/// 1. The profile specified via `with_profile()`
/// 2. The `CDP_PROFILE` environment variable
/// 3. Default to "default"
///
/// Key names match case-insensitively, section names don't.
///
/// `CDP_ACCESS_KEY_ID` and `CDP_PRIVATE_KEY` win over the values in the
/// profile, so a key set in the environment can be combined with the rest
/// of the profile.
#[derive(Debug, Default, Clone)]
pub struct ProfileCredentialProvider {
    profile: Option<String>,
    credentials_file: Option<String>,
}

impl ProfileCredentialProvider {
    /// Create a new ProfileCredentialProvider with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile name to use.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the path to the credentials file.
    pub fn with_credentials_file(mut self, path: impl Into<String>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    fn profile(&self, ctx: &Context) -> String {
        self.profile
            .clone()
            .or_else(|| ctx.env_var(CDP_PROFILE))
            .unwrap_or_else(|| CDP_DEFAULT_PROFILE.to_string())
    }

    fn credentials_file(&self, ctx: &Context) -> String {
        self.credentials_file
            .clone()
            .or_else(|| ctx.env_var(CDP_CREDENTIALS_FILE))
            .unwrap_or_else(|| CDP_CREDENTIALS_PATH.to_string())
    }
}

#[async_trait]
impl ProvideCredential for ProfileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = self.credentials_file(ctx);
        let Some(path) = ctx.expand_home_dir(&path) else {
            debug!("failed to expand homedir for path: {path}");
            return Ok(None);
        };

        let content = match ctx.file_read_as_string(&path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read credentials file {path}: {err:?}");
                return Ok(None);
            }
        };

        let conf = Ini::load_from_str(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse credentials file {path}"))
                .with_source(e)
        })?;

        let profile = self.profile(ctx);
        let Some(props) = conf.section(Some(profile.as_str())) else {
            debug!("profile {profile} not found in credentials file {path}");
            return Ok(None);
        };

        let field = |env: &str, key: &str| -> Result<String> {
            ctx.env_var(env)
                .or_else(|| {
                    props
                        .iter()
                        .find(|(k, _)| k.eq_ignore_ascii_case(key))
                        .map(|(_, v)| v.to_string())
                })
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    Error::config_invalid(format!("CDP profile '{profile}' is missing '{key}'"))
                })
        };

        let access_key_id = field(CDP_ACCESS_KEY_ID, PROFILE_ACCESS_KEY_ID)?;
        let private_key = field(CDP_PRIVATE_KEY, PROFILE_PRIVATE_KEY)?;
        debug!("loaded credential for access key {access_key_id} from profile {profile}");

        Ok(Some(Credential::new(access_key_id, private_key)))
    }
}
