//! Live transport backed by the AWS SDK for ECR.

use super::{
    AuthorizationData, DescribeImagesOutput, DescribeRepositoriesOutput,
    GetAuthorizationTokenOutput, ImageDetailRecord, RegistryTransport, RepositoryRecord,
    TransportResult,
};
use crate::config::Settings;
use crate::error::BoxError;
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ecr::error::DisplayErrorContext;
use aws_sdk_ecr::primitives::DateTime as SdkDateTime;
use chrono::{DateTime, Utc};
use tracing::trace;

#[cfg(test)]
#[path = "ecr_tests.rs"]
mod tests;

/// [`RegistryTransport`] that calls the real ECR API.
#[derive(Debug, Clone)]
pub struct EcrTransport {
    client: aws_sdk_ecr::Client,
}

impl EcrTransport {
    /// Wraps an already configured SDK client.
    pub fn new(client: aws_sdk_ecr::Client) -> Self {
        Self { client }
    }

    /// Builds a transport from an explicit SDK configuration.
    pub fn from_conf(conf: aws_sdk_ecr::Config) -> Self {
        Self::new(aws_sdk_ecr::Client::from_conf(conf))
    }

    /// Loads the shared AWS configuration (environment, profile files, IMDS)
    /// and applies any overrides from `settings`. SDK retries are disabled.
    pub async fn from_settings(settings: &Settings) -> Self {
        // One request per operation; failures surface to the caller as-is
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled());

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        trace!(region = ?sdk_config.region(), "loaded AWS configuration");

        Self::new(aws_sdk_ecr::Client::new(&sdk_config))
    }
}

#[async_trait]
impl RegistryTransport for EcrTransport {
    async fn get_authorization_token(&self) -> TransportResult<GetAuthorizationTokenOutput> {
        let output = self
            .client
            .get_authorization_token()
            .send()
            .await
            .map_err(sdk_error)?;

        let authorization_data = output
            .authorization_data
            .unwrap_or_default()
            .into_iter()
            .map(|data| AuthorizationData {
                authorization_token: data.authorization_token.unwrap_or_default(),
                proxy_endpoint: data.proxy_endpoint.unwrap_or_default(),
            })
            .collect();

        Ok(GetAuthorizationTokenOutput { authorization_data })
    }

    async fn describe_repositories(&self) -> TransportResult<DescribeRepositoriesOutput> {
        let output = self
            .client
            .describe_repositories()
            .send()
            .await
            .map_err(sdk_error)?;

        let repositories = output
            .repositories
            .unwrap_or_default()
            .into_iter()
            .map(|repo| RepositoryRecord {
                repository_name: repo.repository_name,
                repository_arn: repo.repository_arn,
                repository_uri: repo.repository_uri,
                created_at: repo.created_at.as_ref().and_then(to_chrono),
            })
            .collect();

        Ok(DescribeRepositoriesOutput { repositories })
    }

    async fn describe_images(
        &self,
        repository_name: &str,
    ) -> TransportResult<DescribeImagesOutput> {
        let output = self
            .client
            .describe_images()
            .repository_name(repository_name)
            .send()
            .await
            .map_err(sdk_error)?;

        let image_details = output
            .image_details
            .unwrap_or_default()
            .into_iter()
            .map(|image| ImageDetailRecord {
                image_digest: image.image_digest,
                image_tags: image.image_tags,
                image_size_in_bytes: image.image_size_in_bytes,
                image_pushed_at: image.image_pushed_at.as_ref().and_then(to_chrono),
            })
            .collect();

        Ok(DescribeImagesOutput { image_details })
    }
}

/// Flattens an SDK error into its full message chain.
///
/// `SdkError`'s own `Display` only says "service error"; the service's code
/// and message live further down the source chain.
fn sdk_error<E>(err: E) -> BoxError
where
    E: std::error::Error,
{
    DisplayErrorContext(&err).to_string().into()
}

fn to_chrono(dt: &SdkDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(dt.secs(), dt.subsec_nanos())
}
