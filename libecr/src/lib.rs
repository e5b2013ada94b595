//! libecr - Amazon ECR control-plane adapter
//!
//! libecr fetches registry login credentials and lists repositories and
//! images through the ECR API, and hands them back as a small, stable domain
//! model that does not change shape when the upstream API does.
//!
//! # Quick Start
//!
//! ```no_run
//! use libecr::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().region("us-east-1").build().await?;
//!
//!     // Print a `docker login` command for the default registry
//!     println!("{}", client.get_login_command().await?);
//!
//!     // List images of a repository
//!     for image in client.list_images("my-app").await? {
//!         println!("{} {:?}", image.digest, image.tags);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`Client`] - Entry point for the three registry operations
//! - [`ClientBuilder`] - Builds a [`Client`] against the live API
//! - [`Repository`], [`Image`] - Domain values returned by listing
//! - [`Credential`] - Decoded authorization token
//! - [`RegistryTransport`] - Seam for substituting the API in tests
//!
//! # Architecture
//!
//! - **Adapter** ([`client`]) - One remote call per operation, error classification
//! - **Decoder** ([`auth`]) - Authorization token to credential
//! - **Mapper** ([`model`]) - Wire records to domain values
//! - **Transport** ([`transport`]) - The API contract and its AWS SDK implementation

#![warn(clippy::all)]

/// Returns the libecr crate version.
///
/// # Examples
///
/// ```
/// let version = libecr::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod transport;

pub use auth::Credential;
pub use client::{Client, ClientBuilder};
pub use config::Settings;
pub use error::{DecodeErrorKind, EcrError, Result};
pub use model::{Image, Repository};
pub use transport::{EcrTransport, RegistryTransport};
