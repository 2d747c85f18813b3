// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Typed data models for the Telegram Bot HTTP API.
//!
//! The centrepiece is the [`Poll`] family together with its wire codec; the
//! rest of the crate is the minimal surface of messages, chats, updates and
//! rich-text entities needed to put polls in context. Values decoded from
//! the wire are immutable snapshots: state changes arrive as new values.

pub mod entities;
mod errors;
mod files;
mod message;
pub mod polls;
mod reply_markup;
mod update;

pub use chrono;

pub use errors::{MalformedPollRecord, UnsupportedPollOperation};
pub use files::InputFile;
pub use message::{Chat, ChatId, Message, ReplyParameters, User};
pub use polls::{
    ApproximateScheduledCloseInfo, ExactScheduledCloseInfo, MultipleAnswersPoll, Poll, PollOption,
    QuizPoll, RawPollRecord, RegularPoll, ScheduledCloseInfo, UnknownPollType,
};
pub use reply_markup::{InlineKeyboardButton, InlineKeyboardMarkup};
pub use update::{PollAnswer, Update};
