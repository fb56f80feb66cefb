use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon separated list of config files which
/// replaces the default config path.
pub const CONFIG_PATH_ENV_VAR: &str = "RENEGADES_CONFIG";

pub fn load() -> anyhow::Result<Config> {
    match std::env::var_os(CONFIG_PATH_ENV_VAR) {
        Some(paths) => load_paths(&std::env::split_paths(&paths).collect::<Vec<_>>()),
        None => load_paths(&[PathBuf::from(DEFAULT_CONFIG_PATH)]),
    }
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_overrides(paths, &[])
}

/// Loads and merges the given config files, then applies the given TOML
/// fragments on top of them. Later sources override earlier ones.
pub fn load_with_overrides(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;
    overrides
        .iter()
        .fold(builder, |builder, fragment| {
            builder.add_source(File::from_str(fragment, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub recaptcha: RecaptchaConfig,
    pub email: EmailConfig,
    pub notifications: NotificationsConfig,
    pub forms: FormsConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub real_ip: Option<RealIpConfig>,
}

#[derive(Debug, Deserialize)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[derive(Debug, Deserialize)]
pub struct RecaptchaConfig {
    #[serde(deserialize_with = "non_empty_string")]
    pub secret: String,
    pub siteverify_endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    #[serde(deserialize_with = "non_empty_string")]
    pub api_key: String,
    pub from: EmailAddress,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationsConfig {
    pub recipients: Recipients,
}

#[derive(Debug, Deserialize)]
pub struct FormsConfig {
    pub membership_form_url: Url,
}

/// A comma separated list of email addresses with at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipients(pub Vec<EmailAddress>);

impl std::ops::Deref for Recipients {
    type Target = [EmailAddress];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Recipients {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let recipients = s
            .split(',')
            .map(str::trim)
            .filter(|recipient| !recipient.is_empty())
            .map(|recipient| {
                recipient
                    .parse()
                    .map_err(|_| serde::de::Error::custom(format!("Invalid email address: {recipient:?}")))
            })
            .collect::<Result<Vec<EmailAddress>, _>>()?;
        if recipients.is_empty() {
            return Err(serde::de::Error::custom("Expected at least one email address"));
        }
        Ok(Self(recipients))
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("Expected a non-empty string"));
    }
    Ok(s)
}
