//! Failures of a token acquisition.
//!
//! Every variant is fatal for the current run. Problems met while checking cache
//! validity never show up here: they only trigger a refresh.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The token request could not be sent or no response arrived.
    #[error("failed to perform token request to '{endpoint}': {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read token response body: {0}")]
    ResponseBody(#[source] reqwest::Error),

    /// The authorization server answered with anything but `200 OK`.
    #[error("failed to obtain oauth access token: status {status}, body: {body}")]
    Status { status: u16, body: String },

    /// `200 OK`, but the body is not a token response. The cache is left as it was.
    #[error("token endpoint '{endpoint}' returned an undecodable token response: {source}")]
    InvalidResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write cache file '{}': {source}", .path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read cache file '{}': {source}", .path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode client credentials from '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
