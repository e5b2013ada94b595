//! Domain model and wire-record mapping.
//!
//! [`Repository`] and [`Image`] are what the rest of the program sees. They
//! have no optional fields: anything the API left out is filled with the
//! type's zero value here, and only here.

use crate::transport::{ImageDetailRecord, RepositoryRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[cfg(test)]
mod tests;

/// Timestamp used when the API did not report one (the Unix epoch).
pub const ZERO_TIMESTAMP: DateTime<Utc> = DateTime::UNIX_EPOCH;

/// A repository as it existed when it was listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Repository name, unique within an account and region
    pub name: String,
    /// URI to push to and pull from
    pub uri: String,
    /// Amazon Resource Name of the repository
    pub arn: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// An image stored in a repository.
///
/// Identified by `(repository, digest)`. An image with no tags is untagged,
/// not broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    /// Repository the image belongs to
    pub repository: String,
    /// Manifest digest (`sha256:...`)
    pub digest: String,
    /// Tags pointing at this image, in the order the API returned them
    pub tags: Vec<String>,
    /// Compressed size in bytes
    pub size_in_bytes: u64,
    /// Push time
    pub pushed_at: DateTime<Utc>,
}

/// Converts a DescribeRepositories record into a [`Repository`].
///
/// Never fails; absent fields become empty strings or [`ZERO_TIMESTAMP`].
///
/// # Examples
///
/// ```
/// use libecr::model::{map_repository, ZERO_TIMESTAMP};
/// use libecr::transport::RepositoryRecord;
///
/// let record = RepositoryRecord {
///     repository_name: Some("foo".to_string()),
///     ..Default::default()
/// };
/// let repo = map_repository(record);
/// assert_eq!(repo.name, "foo");
/// assert_eq!(repo.uri, "");
/// assert_eq!(repo.created_at, ZERO_TIMESTAMP);
/// ```
pub fn map_repository(record: RepositoryRecord) -> Repository {
    Repository {
        name: record.repository_name.unwrap_or_default(),
        uri: record.repository_uri.unwrap_or_default(),
        arn: record.repository_arn.unwrap_or_default(),
        created_at: record.created_at.unwrap_or(ZERO_TIMESTAMP),
    }
}

/// Converts a DescribeImages record into an [`Image`] of `repository`.
///
/// The repository name is supplied by the caller because image records are
/// scoped to the repository that was queried. Never fails.
///
/// # Examples
///
/// ```
/// use libecr::model::map_image;
/// use libecr::transport::ImageDetailRecord;
///
/// let record = ImageDetailRecord {
///     image_digest: Some("sha256:abc".to_string()),
///     ..Default::default()
/// };
/// let image = map_image(record, "foo");
/// assert_eq!(image.repository, "foo");
/// assert!(image.tags.is_empty());
/// assert_eq!(image.size_in_bytes, 0);
/// ```
pub fn map_image(record: ImageDetailRecord, repository: &str) -> Image {
    Image {
        repository: repository.to_string(),
        digest: record.image_digest.unwrap_or_default(),
        tags: record.image_tags.unwrap_or_default(),
        size_in_bytes: record
            .image_size_in_bytes
            .and_then(|size| u64::try_from(size).ok())
            .unwrap_or_default(),
        pushed_at: record.image_pushed_at.unwrap_or(ZERO_TIMESTAMP),
    }
}
