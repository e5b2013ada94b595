//! Registry client adapter.
//!
//! [`Client`] is what command handlers talk to. Each operation makes exactly
//! one transport call, hands the response to the decoder or the mapper, and
//! returns domain values or a classified [`EcrError`]. The client holds no
//! mutable state, so a single instance can serve concurrent callers.

use crate::auth::Credential;
use crate::config::Settings;
use crate::error::{EcrError, Result};
use crate::model::{Image, Repository, map_image, map_repository};
use crate::transport::{EcrTransport, RegistryTransport};
use tracing::{debug, warn};


/// High-level ECR client, generic over the transport that reaches the API.
///
/// # Examples
///
/// ```no_run
/// use libecr::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder().region("us-east-1").build().await?;
///
///     println!("{}", client.get_login_command().await?);
///
///     for repo in client.list_repositories().await? {
///         println!("{}\t{}", repo.name, repo.uri);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = EcrTransport> {
    transport: T,
}

impl Client<EcrTransport> {
    /// Creates a builder for a client backed by the live ECR API.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: RegistryTransport> Client<T> {
    /// Wraps a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches a fresh authorization token and returns the `docker login`
    /// command for it.
    ///
    /// Only the first authorization entry is used; the API returns one entry
    /// for a default-registry request.
    ///
    /// # Errors
    ///
    /// - [`EcrError::RemoteCallFailed`] if the API call fails.
    /// - [`EcrError::EmptyResponse`] if the response has no authorization data.
    /// - [`EcrError::Decode`] if the token is not base64 `user:pass`.
    pub async fn get_login_command(&self) -> Result<String> {
        debug!(operation = "GetAuthorizationToken", "calling ECR");

        let output = self
            .transport
            .get_authorization_token()
            .await
            .map_err(|e| EcrError::remote("retrieve authorization token", e))?;

        let Some(data) = output.authorization_data.first() else {
            warn!("authorization token response contained no entries");
            return Err(EcrError::empty_response("authorization data"));
        };

        let credential = Credential::decode(&data.authorization_token, &data.proxy_endpoint)
            .inspect_err(|e| warn!(kind = ?e.decode_kind(), "could not decode authorization token"))?;

        debug!(endpoint = %credential.endpoint, "decoded authorization token");

        Ok(credential.login_command())
    }

    /// Lists the images stored in `repository`, in the order the API returned them.
    ///
    /// The repository name is passed through as-is; rejecting empty names is
    /// up to the caller.
    ///
    /// # Errors
    ///
    /// [`EcrError::RemoteCallFailed`], naming `repository`, if the API call fails.
    pub async fn list_images(&self, repository: &str) -> Result<Vec<Image>> {
        debug!(operation = "DescribeImages", repository, "calling ECR");

        let output = self
            .transport
            .describe_images(repository)
            .await
            .map_err(|e| EcrError::remote_with_context("retrieve images", repository, e))?;

        let images: Vec<Image> = output
            .image_details
            .into_iter()
            .map(|record| map_image(record, repository))
            .collect();

        debug!(repository, count = images.len(), "listed images");

        Ok(images)
    }

    /// Lists every repository visible to the caller, in the order the API
    /// returned them.
    ///
    /// # Errors
    ///
    /// [`EcrError::RemoteCallFailed`] if the API call fails.
    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        debug!(operation = "DescribeRepositories", "calling ECR");

        let output = self
            .transport
            .describe_repositories()
            .await
            .map_err(|e| EcrError::remote("retrieve repositories", e))?;

        let repositories: Vec<Repository> = output
            .repositories
            .into_iter()
            .map(map_repository)
            .collect();

        debug!(count = repositories.len(), "listed repositories");

        Ok(repositories)
    }
}

/// Builder for a [`Client`] backed by the live ECR API.
///
/// # Examples
///
/// ```no_run
/// use libecr::ClientBuilder;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ClientBuilder::new()
///         .region("eu-west-1")
///         .profile("production")
///         .build()
///         .await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    settings: Settings,
}

impl ClientBuilder {
    /// Creates a builder that defers everything to the AWS SDK defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.settings.region = Some(region.into());
        self
    }

    /// Sets the named profile from the shared AWS config files.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.settings.profile = Some(profile.into());
        self
    }

    /// Overrides the ECR API endpoint.
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.settings.endpoint_url = Some(url.into());
        self
    }

    /// Applies settings on top of what was set so far.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = self.settings.merge(settings);
        self
    }

    /// Returns the settings the client will be built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Validates the settings, loads AWS configuration and builds the client.
    ///
    /// # Errors
    ///
    /// [`EcrError::Config`] if a setting is invalid.
    pub async fn build(self) -> Result<Client<EcrTransport>> {
        self.settings.validate()?;

        let transport = EcrTransport::from_settings(&self.settings).await;
        Ok(Client::new(transport))
    }
}
