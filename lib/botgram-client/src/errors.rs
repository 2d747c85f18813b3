// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

use botgram_types::UnsupportedPollOperation;

/// The error type reported by the server when a request is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcError {
    /// A value similar to HTTP status codes.
    pub code: i32,
    /// Human-readable explanation, straight from the server.
    pub description: String,
    /// Present when the server asks the client to back off.
    pub retry_after: Option<u32>,
    /// Present when the group a request addressed migrated to a supergroup.
    pub migrate_to_chat_id: Option<i64>,
}

impl Error for RpcError {}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rpc error {}: {}", self.code, self.description)?;
        if let Some(seconds) = self.retry_after {
            write!(f, " (retry after {seconds}s)")?;
        }
        Ok(())
    }
}

/// Something went wrong while invoking a request.
#[derive(Debug)]
pub enum InvocationError {
    /// The HTTP round trip itself failed.
    Http(reqwest::Error),
    /// The response body was not the expected JSON envelope.
    Deserialize(serde_json::Error),
    /// The server reported success but sent no result payload.
    EmptyResponse,
    /// The server understood the request and rejected it.
    Rpc(RpcError),
}

impl Error for InvocationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(error) => Some(error),
            Self::Deserialize(error) => Some(error),
            Self::EmptyResponse => None,
            Self::Rpc(error) => Some(error),
        }
    }
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) => write!(f, "request error, HTTP failed: {error}"),
            Self::Deserialize(error) => write!(f, "request error, bad response: {error}"),
            Self::EmptyResponse => write!(f, "request error, ok but empty response"),
            Self::Rpc(error) => write!(f, "request error: {error}"),
        }
    }
}

impl From<reqwest::Error> for InvocationError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error)
    }
}

impl From<serde_json::Error> for InvocationError {
    fn from(error: serde_json::Error) -> Self {
        Self::Deserialize(error)
    }
}

/// Why publishing a typed poll failed.
#[derive(Debug)]
pub enum SendPollError {
    /// The poll value itself cannot be turned into a request.
    Unsupported(UnsupportedPollOperation),
    /// Building the request worked but invoking it did not.
    Invocation(InvocationError),
}

impl Error for SendPollError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unsupported(error) => Some(error),
            Self::Invocation(error) => Some(error),
        }
    }
}

impl fmt::Display for SendPollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(error) => write!(f, "send poll error: {error}"),
            Self::Invocation(error) => write!(f, "send poll error, bad invoke: {error}"),
        }
    }
}

impl From<UnsupportedPollOperation> for SendPollError {
    fn from(error: UnsupportedPollOperation) -> Self {
        Self::Unsupported(error)
    }
}

impl From<InvocationError> for SendPollError {
    fn from(error: InvocationError) -> Self {
        Self::Invocation(error)
    }
}
