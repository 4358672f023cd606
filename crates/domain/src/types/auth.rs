//! Authentication types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TradelineError};

/// Partner OAuth client credentials.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), client_secret: client_secret.into() }
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Result of a successful token exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    access_token: String,
    refresh_token: String,
    /// Lifetime of the access token in seconds
    expires_in: i64,
}

impl AuthenticateResponse {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_in,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }
}

/// How the caller wants to authenticate.
///
/// The `*WithCredentials` variants override the configured client id/secret
/// for that single token request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticateRequest {
    RefreshToken { refresh_token: String },
    Password { username: String, password: String },
    RefreshTokenWithCredentials { credentials: ClientCredentials, refresh_token: String },
    PasswordWithCredentials { credentials: ClientCredentials, username: String, password: String },
}

impl AuthenticateRequest {
    pub fn refresh_token(refresh_token: impl Into<String>) -> Self {
        Self::RefreshToken { refresh_token: refresh_token.into() }
    }

    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password { username: username.into(), password: password.into() }
    }

    pub fn refresh_token_with_credentials(
        credentials: ClientCredentials,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self::RefreshTokenWithCredentials { credentials, refresh_token: refresh_token.into() }
    }

    pub fn password_with_credentials(
        credentials: ClientCredentials,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::PasswordWithCredentials {
            credentials,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build a request from positional credentials:
    ///
    /// * `[refresh_token]`
    /// * `[username, password]`
    /// * `[client_id, client_secret, refresh_token]`
    /// * `[client_id, client_secret, username, password]`
    ///
    /// # Errors
    ///
    /// Returns [`TradelineError::Usage`] for any other argument count.
    pub fn from_positional(args: &[&str]) -> Result<Self> {
        match *args {
            [refresh_token] => Ok(Self::refresh_token(refresh_token)),
            [username, password] => Ok(Self::password(username, password)),
            [client_id, client_secret, refresh_token] => Ok(Self::refresh_token_with_credentials(
                ClientCredentials::new(client_id, client_secret),
                refresh_token,
            )),
            [client_id, client_secret, username, password] => Ok(Self::password_with_credentials(
                ClientCredentials::new(client_id, client_secret),
                username,
                password,
            )),
            _ => Err(TradelineError::Usage(format!(
                "Wrong number of arguments passed to authenticate: expected 1 to 4, got {}",
                args.len()
            ))),
        }
    }

    /// Credential override carried by this request, if any.
    pub fn credentials(&self) -> Option<&ClientCredentials> {
        match self {
            Self::RefreshTokenWithCredentials { credentials, .. }
            | Self::PasswordWithCredentials { credentials, .. } => Some(credentials),
            Self::RefreshToken { .. } | Self::Password { .. } => None,
        }
    }
}
