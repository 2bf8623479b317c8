use reqwest::{StatusCode, blocking::Response};
use serde::Deserialize;
use thiserror::Error;

use crate::utils::truncate_for_log;

/// Error returned by the UltraDNS API alongside a non-success status.
#[derive(Error, Debug)]
#[error("UltraDNS API error: {status} - {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn from_response(resp: Response) -> Self {
        let status = resp.status();
        let text = resp
            .text()
            .unwrap_or_else(|e| format!("unable to read response body: {e}"));

        Self::new(status, Self::message_from_body(&text))
    }

    /// Pulls a human-readable message out of one of the error bodies the API sends.
    fn message_from_body(text: &str) -> String {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ErrorEntry {
            error_code: Option<i64>,
            error_message: String,
        }

        #[derive(Deserialize)]
        struct OAuthError {
            error: String,
            error_description: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ErrorResp {
            List(Vec<ErrorEntry>),
            Single(ErrorEntry),
            OAuth(OAuthError),
        }

        let format_entry = |e: &ErrorEntry| match e.error_code {
            Some(code) => format!("{code}: {}", e.error_message),
            None => e.error_message.clone(),
        };

        match serde_json::from_str::<ErrorResp>(text) {
            Ok(ErrorResp::List(entries)) if !entries.is_empty() => entries
                .iter()
                .map(format_entry)
                .collect::<Vec<_>>()
                .join("; "),
            Ok(ErrorResp::Single(entry)) => format_entry(&entry),
            Ok(ErrorResp::OAuth(e)) => match e.error_description {
                Some(description) => format!("{}: {description}", e.error),
                None => e.error,
            },
            _ => format!("unexpected error body {:?}", truncate_for_log(text)),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The two coarse ways a call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The HTTP exchange failed or the API answered with a non-success status.
    Transport,
    /// The response body did not have the expected shape.
    Decode,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("unable to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("path segment {0:?} can't be sent in a URL")]
    InvalidPathSegment(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport(_)
            | ClientError::Api(_)
            | ClientError::InvalidPathSegment(_) => ErrorKind::Transport,
            ClientError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// The HTTP status of the failed exchange, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Transport(e) => e.status(),
            ClientError::Api(e) => Some(e.status()),
            ClientError::Decode(_) | ClientError::InvalidPathSegment(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("endpoint {0:?} cannot be used as a base URL")]
    InvalidEndpoint(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
