// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
mod messages;
mod net;
mod polls;

use botgram_types::{Update, User};

use crate::errors::InvocationError;
use crate::requests::{GetMe, GetUpdates};

const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// A bot session tied to one token.
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
#[derive(Clone)]
pub struct Bot {
    http: reqwest::Client,
    token: String,
    api_url: String,
}

impl Bot {
    /// Creates a session for the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Points the session at a different API server, such as a locally
    /// hosted Bot API instance.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Returns the bot's own account information.
    pub async fn get_me(&self) -> Result<User, InvocationError> {
        self.invoke(&GetMe {}).await
    }

    /// Long-polls for incoming updates.
    ///
    /// Pass the highest `update_id` seen so far plus one as `offset` to
    /// acknowledge previous updates.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: u32,
    ) -> Result<Vec<Update>, InvocationError> {
        self.invoke(&GetUpdates {
            offset,
            timeout: Some(timeout),
            ..GetUpdates::default()
        })
        .await
    }
}
