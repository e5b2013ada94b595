//! Connection settings.
//!
//! Settings come from a TOML table and from environment variables prefixed
//! with `ECRCLI_` (for example `ECRCLI_REGION=eu-west-1`), and are layered with
//! [`Settings::merge`]. Anything left unset falls through to the AWS SDK's own
//! resolution (`AWS_REGION`, `AWS_PROFILE`, shared config files).

use crate::error::{EcrError, Result};
use config::{Config as ConfigRs, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
mod tests;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "ECRCLI";

/// Where and as whom to reach the ECR API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Settings {
    /// AWS region, e.g. `us-east-1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Override for the ECR API endpoint (local stacks, VPC endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl Settings {
    /// Parses `Settings` from a TOML string, without environment overrides.
    ///
    /// Values are not checked here; see [`Settings::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use libecr::config::Settings;
    ///
    /// let settings = Settings::from_toml_str("region = \"eu-west-1\"").unwrap();
    /// assert_eq!(settings.region.as_deref(), Some("eu-west-1"));
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder().add_source(File::from_str(s, FileFormat::Toml));

        Self::from_builder(builder)
    }

    /// Reads `Settings` from `ECRCLI_*` environment variables.
    ///
    /// Variables that are not set leave the corresponding field as `None`.
    /// Values are not checked here; see [`Settings::validate`].
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        let builder = ConfigRs::builder().add_source(environment);

        Self::from_builder(builder)
    }

    /// Applies every `Some` field of `overrides` on top of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libecr::config::Settings;
    ///
    /// let base = Settings { region: Some("us-east-1".into()), ..Default::default() };
    /// let flags = Settings { profile: Some("prod".into()), ..Default::default() };
    /// let merged = base.merge(flags);
    /// assert_eq!(merged.region.as_deref(), Some("us-east-1"));
    /// assert_eq!(merged.profile.as_deref(), Some("prod"));
    /// ```
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            region: overrides.region.or(self.region),
            profile: overrides.profile.or(self.profile),
            endpoint_url: overrides.endpoint_url.or(self.endpoint_url),
        }
    }

    /// Checks values that the SDK would otherwise reject much later.
    pub fn validate(&self) -> Result<()> {
        if let Some(region) = &self.region
            && region.trim().is_empty()
        {
            return Err(EcrError::config("region must not be empty", None));
        }

        if let Some(endpoint) = &self.endpoint_url {
            let url = Url::parse(endpoint).map_err(|e| {
                EcrError::config_with_source(
                    format!("invalid endpoint URL: {}", endpoint),
                    None,
                    e,
                )
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(EcrError::config(
                    format!("endpoint URL must be http or https: {}", endpoint),
                    None,
                ));
            }
        }

        Ok(())
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| EcrError::config_with_source("Failed to deserialize settings", None, e))
    }
}
