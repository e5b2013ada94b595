//! Authorization token decoding.
//!
//! ECR hands out registry credentials as a base64 blob of `username:password`
//! together with the proxy endpoint to log in to. This module turns that pair
//! into a [`Credential`] and renders the matching `docker login` command.

use crate::error::{EcrError, Result};
use base64::{Engine as _, engine::general_purpose};


/// Registry credentials decoded from an authorization token.
///
/// Credentials are short-lived: they are valid only until the token they came
/// from expires, and are never stored by this crate.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Username for `docker login` (always `AWS` for ECR)
    pub username: String,
    /// Password for `docker login`
    pub password: String,
    /// Registry endpoint the credential is valid for
    pub endpoint: String,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Credential {
    /// Decodes a base64 authorization token and pairs it with its endpoint.
    ///
    /// The decoded token is split on the first `:` only, so passwords that
    /// contain colons survive intact.
    ///
    /// # Errors
    ///
    /// - [`DecodeErrorKind::Encoding`](crate::error::DecodeErrorKind::Encoding) if the token
    ///   is not valid base64 or does not decode to UTF-8.
    /// - [`DecodeErrorKind::Malformed`](crate::error::DecodeErrorKind::Malformed) if the
    ///   decoded string has no `:`. The decoded string is included in the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libecr::auth::Credential;
    ///
    /// let cred = Credential::decode("dXNlcm5hbWU6cGFzc3dvcmQ=", "https://example.com").unwrap();
    /// assert_eq!(cred.username, "username");
    /// assert_eq!(cred.password, "password");
    /// assert_eq!(cred.endpoint, "https://example.com");
    /// ```
    pub fn decode(raw_token: &str, endpoint: &str) -> Result<Self> {
        let bytes = general_purpose::STANDARD
            .decode(raw_token)
            .map_err(EcrError::encoding)?;

        let data = String::from_utf8(bytes).map_err(EcrError::encoding)?;

        let Some((username, password)) = data.split_once(':') else {
            return Err(EcrError::malformed(data));
        };

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            endpoint: endpoint.to_string(),
        })
    }

    /// Returns the shell command that logs the docker CLI in to the registry.
    ///
    /// The output format is relied upon by scripts that `eval` it, so the
    /// flag order and spacing are fixed.
    ///
    /// # Examples
    ///
    /// ```
    /// use libecr::auth::Credential;
    ///
    /// let cred = Credential::decode("QVdTOnNlY3JldA==", "https://example.com").unwrap();
    /// assert_eq!(cred.login_command(), "docker login -u AWS -p secret https://example.com");
    /// ```
    pub fn login_command(&self) -> String {
        format!(
            "docker login -u {} -p {} {}",
            self.username, self.password, self.endpoint
        )
    }
}
