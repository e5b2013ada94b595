//! Canned registry responses shared by the command tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use libecr::transport::{
    AuthorizationData, DescribeImagesOutput, DescribeRepositoriesOutput,
    GetAuthorizationTokenOutput, ImageDetailRecord, RepositoryRecord, TransportResult,
};
use libecr::{Client, RegistryTransport};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ENDPOINT: &str = "https://012345678910.dkr.ecr.us-east-1.amazonaws.com";

/// Transport that serves fixed data, or fails every call when `fail` is set.
#[derive(Default)]
pub struct StubTransport {
    pub token: String,
    pub repositories: Vec<RepositoryRecord>,
    pub images: Vec<ImageDetailRecord>,
    pub fail: Option<String>,
    pub calls: AtomicUsize,
}

impl StubTransport {
    fn check(&self) -> TransportResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RegistryTransport for StubTransport {
    async fn get_authorization_token(&self) -> TransportResult<GetAuthorizationTokenOutput> {
        self.check()?;
        Ok(GetAuthorizationTokenOutput {
            authorization_data: vec![AuthorizationData {
                authorization_token: self.token.clone(),
                proxy_endpoint: ENDPOINT.to_string(),
            }],
        })
    }

    async fn describe_repositories(&self) -> TransportResult<DescribeRepositoriesOutput> {
        self.check()?;
        Ok(DescribeRepositoriesOutput {
            repositories: self.repositories.clone(),
        })
    }

    async fn describe_images(
        &self,
        _repository_name: &str,
    ) -> TransportResult<DescribeImagesOutput> {
        self.check()?;
        Ok(DescribeImagesOutput {
            image_details: self.images.clone(),
        })
    }
}

pub fn client(transport: StubTransport) -> Client<StubTransport> {
    Client::new(transport)
}

pub fn failing(message: &str) -> StubTransport {
    StubTransport {
        fail: Some(message.to_string()),
        ..Default::default()
    }
}

pub fn timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1500532805, 0).unwrap()
}

pub fn repository(name: &str) -> RepositoryRecord {
    RepositoryRecord {
        repository_name: Some(name.to_string()),
        repository_arn: Some(format!(
            "arn:aws:ecr:us-east-1:012345678910:repository/{}",
            name
        )),
        repository_uri: Some(format!(
            "012345678910.dkr.ecr.us-east-1.amazonaws.com/{}",
            name
        )),
        created_at: Some(timestamp()),
    }
}

pub fn image(digest: &str, tags: &[&str], size: i64) -> ImageDetailRecord {
    ImageDetailRecord {
        image_digest: Some(digest.to_string()),
        image_tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        image_size_in_bytes: Some(size),
        image_pushed_at: Some(timestamp()),
    }
}
