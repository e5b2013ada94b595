//! Transport layer for the ECR control plane.
//!
//! [`RegistryTransport`] is the seam between the adapter and whatever actually
//! talks to the remote API. The live implementation is [`EcrTransport`]; tests
//! substitute an in-memory implementation.
//!
//! The wire types in this module mirror the API responses: every field the
//! service may omit is an `Option`. Turning them into domain values is the job
//! of [`crate::model`], not of the transport.

use crate::error::BoxError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub mod ecr;

pub use ecr::EcrTransport;


/// Result of a transport call. Errors are opaque to the adapter.
pub type TransportResult<T> = std::result::Result<T, BoxError>;

/// One entry of a GetAuthorizationToken response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationData {
    /// Base64 encoded `username:password`
    pub authorization_token: String,
    /// Registry URL to use with the token
    pub proxy_endpoint: String,
}

/// Response of GetAuthorizationToken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAuthorizationTokenOutput {
    pub authorization_data: Vec<AuthorizationData>,
}

/// A repository record as returned by DescribeRepositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub repository_name: Option<String>,
    pub repository_arn: Option<String>,
    pub repository_uri: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Response of DescribeRepositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeRepositoriesOutput {
    pub repositories: Vec<RepositoryRecord>,
}

/// An image record as returned by DescribeImages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageDetailRecord {
    pub image_digest: Option<String>,
    pub image_tags: Option<Vec<String>>,
    pub image_size_in_bytes: Option<i64>,
    pub image_pushed_at: Option<DateTime<Utc>>,
}

/// Response of DescribeImages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeImagesOutput {
    pub image_details: Vec<ImageDetailRecord>,
}

/// The three control-plane operations the adapter depends on.
///
/// Implementations must be safe to share between tasks; the adapter never
/// synchronizes access to its transport.
#[async_trait]
pub trait RegistryTransport: Send + Sync {
    /// Fetches an authorization token for the caller's default registry.
    async fn get_authorization_token(&self) -> TransportResult<GetAuthorizationTokenOutput>;

    /// Lists every repository visible to the caller (first page only).
    async fn describe_repositories(&self) -> TransportResult<DescribeRepositoriesOutput>;

    /// Lists images stored in `repository_name` (first page only).
    async fn describe_images(&self, repository_name: &str)
    -> TransportResult<DescribeImagesOutput>;
}

#[async_trait]
impl<T: RegistryTransport + ?Sized> RegistryTransport for std::sync::Arc<T> {
    async fn get_authorization_token(&self) -> TransportResult<GetAuthorizationTokenOutput> {
        (**self).get_authorization_token().await
    }

    async fn describe_repositories(&self) -> TransportResult<DescribeRepositoriesOutput> {
        (**self).describe_repositories().await
    }

    async fn describe_images(
        &self,
        repository_name: &str,
    ) -> TransportResult<DescribeImagesOutput> {
        (**self).describe_images(repository_name).await
    }
}
