// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A typed client for the Telegram Bot HTTP API.
//!
//! A [`Bot`] wraps a bot token and issues requests over HTTPS. Common
//! operations have one-line convenience methods; anything else can be built
//! as a [`requests`] struct and passed to [`Bot::invoke`].
//!
//! ```no_run
//! use botgram_client::Bot;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let bot = Bot::new(std::env::var("BOT_TOKEN")?);
//! let me = bot.get_me().await?;
//! println!("logged in as {}", me.first_name);
//! bot.send_message(12345678, "hello!").await?;
//! # Ok(())
//! # }
//! ```
//!
//! Transient-failure handling (retries, flood-wait backoff) is left to the
//! caller; the [`errors::RpcError`] carries the server's `retry_after` hint.

mod client;
pub mod errors;
pub mod requests;

pub use botgram_types as types;
pub use client::Bot;
pub use errors::{InvocationError, RpcError, SendPollError};
