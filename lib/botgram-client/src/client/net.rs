// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The HTTP round trip shared by every request.

use log::{debug, warn};
use serde::Deserialize;

use super::Bot;
use crate::errors::{InvocationError, RpcError};
use crate::requests::Request;

/// The envelope every Bot API response comes wrapped in.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    // No `serde(default)` here: it would bound `T: Default`, and response
    // types have no `Default`. A missing `Option` is already `None`.
    result: Option<T>,
    description: Option<String>,
    error_code: Option<i32>,
    parameters: Option<ResponseParameters>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseParameters {
    retry_after: Option<u32>,
    migrate_to_chat_id: Option<i64>,
}

fn unwrap_envelope<T>(
    method: &'static str,
    response: ApiResponse<T>,
) -> Result<T, InvocationError> {
    if response.ok {
        response.result.ok_or(InvocationError::EmptyResponse)
    } else {
        let parameters = response.parameters.unwrap_or_default();
        let error = RpcError {
            code: response.error_code.unwrap_or(0),
            description: response
                .description
                .unwrap_or_else(|| "no description".to_string()),
            retry_after: parameters.retry_after,
            migrate_to_chat_id: parameters.migrate_to_chat_id,
        };
        warn!("{} failed: {}", method, error);
        Err(InvocationError::Rpc(error))
    }
}

impl Bot {
    /// Invokes a raw request and returns its result.
    pub async fn invoke<R: Request>(&self, request: &R) -> Result<R::Response, InvocationError> {
        debug!("invoking {}", R::NAME);
        let url = format!("{}/bot{}/{}", self.api_url, self.token, R::NAME);
        let body = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await?
            .text()
            .await?;
        let response: ApiResponse<R::Response> = serde_json::from_str(&body)?;
        unwrap_envelope(R::NAME, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botgram_types::User;

    #[test]
    fn ok_envelope_yields_the_result() {
        let response: ApiResponse<User> = serde_json::from_str(
            r#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"quizbot"}}"#,
        )
        .unwrap();
        let user = unwrap_envelope("getMe", response).unwrap();
        assert_eq!(user.first_name, "quizbot");
    }

    #[test]
    fn error_envelope_yields_an_rpc_error() {
        let response: ApiResponse<User> = serde_json::from_str(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 14","parameters":{"retry_after":14}}"#,
        )
        .unwrap();
        match unwrap_envelope("getMe", response) {
            Err(InvocationError::Rpc(error)) => {
                assert_eq!(error.code, 429);
                assert_eq!(error.retry_after, Some(14));
            }
            other => panic!("expected an rpc error, got {:?}", other),
        }
    }

    #[test]
    fn envelope_decodes_for_types_without_default() {
        use botgram_types::Poll;

        // `stopPoll` answers with a bare poll; `Poll` (like `Message` and
        // `User`) has no `Default`, so the envelope must not require one.
        let response: ApiResponse<Poll> = serde_json::from_str(
            r#"{"ok":true,"result":{"id":"p1","question":"Q?","options":[],"total_voter_count":0,"type":"regular","is_closed":true}}"#,
        )
        .unwrap();
        let poll = unwrap_envelope("stopPoll", response).unwrap();
        assert!(poll.is_closed());
    }

    #[test]
    fn ok_without_result_is_an_error() {
        let response: ApiResponse<User> = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(matches!(
            unwrap_envelope("getMe", response),
            Err(InvocationError::EmptyResponse)
        ));
    }
}
