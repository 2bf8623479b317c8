//! Credentials and bearer-token state of a [Client](crate::Client).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::deserialize_to_option_i64;

/// Body returned by the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default, alias = "token_type")]
    pub token_type: String,
    #[serde(alias = "access_token")]
    pub access_token: String,
    #[serde(default, alias = "refresh_token")]
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    #[serde(
        default,
        alias = "expires_in",
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_in: Option<i64>,
}

/// Login state held by a client.
///
/// Starts out empty and is replaced as a whole by each successful
/// [authenticate](crate::Client::authenticate) call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    username: String,
    password: String,
    access_token: String,
    refresh_token: String,
    auth_header: String,
    expires_in: Option<i64>,
}

impl Session {
    /// Builds the session that results from a successful login.
    pub(crate) fn from_auth(username: &str, password: &str, auth: AuthResponse) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            auth_header: format!("Bearer {}", auth.access_token),
            access_token: auth.access_token,
            refresh_token: auth.refresh_token,
            expires_in: auth.expires_in,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Value sent in the `Authorization` header of authorized calls.
    ///
    /// Empty until the first successful login.
    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }

    pub fn expires_in(&self) -> Option<i64> {
        self.expires_in
    }

    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(s: &str) -> &'static str {
            if s.is_empty() { "" } else { "<redacted>" }
        }

        f.debug_struct("Session")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
