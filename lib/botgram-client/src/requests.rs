// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Typed requests, one per Bot API method.
//!
//! Each struct is the JSON body of its method; fields left as `None` stay
//! off the wire. The convenience methods on [`crate::Bot`] cover the common
//! cases, and any request can be built here directly and passed to
//! [`crate::Bot::invoke`] when more options are needed.

use serde::Serialize;
use serde::de::DeserializeOwned;

use botgram_types::entities::{self, RawMessageEntity};
use botgram_types::polls::{QUIZ_POLL_TYPE, REGULAR_POLL_TYPE};
use botgram_types::{
    ChatId, InlineKeyboardMarkup, InputFile, Message, Poll, QuizPoll, RegularPoll,
    ReplyParameters, ScheduledCloseInfo, UnsupportedPollOperation, Update, User,
};

/// Anything that can be sent over a bot session.
///
/// An implementor maps to one HTTP method of the Bot API: the value is the
/// request body, [`Request::NAME`] names the method in the URL, and
/// [`Request::Response`] is the payload inside the response envelope.
pub trait Request: Serialize {
    type Response: DeserializeOwned;

    /// The method name, as it appears in the request URL.
    const NAME: &'static str;
}

/// Fetches the bot's own account.
#[derive(Clone, Debug, Serialize)]
pub struct GetMe {}

impl Request for GetMe {
    type Response = User;
    const NAME: &'static str = "getMe";
}

/// Long-polls for incoming updates.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Long-poll timeout in seconds; `0` or absent means short polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl Request for GetUpdates {
    type Response = Vec<Update>;
    const NAME: &'static str = "getUpdates";
}

#[derive(Clone, Debug, Serialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RawMessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            entities: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }
}

impl Request for SendMessage {
    type Response = Message;
    const NAME: &'static str = "sendMessage";
}

#[derive(Clone, Debug, Serialize)]
pub struct EditMessageText {
    pub chat_id: ChatId,
    pub message_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RawMessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageText {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            text: text.into(),
            entities: None,
            reply_markup: None,
        }
    }
}

impl Request for EditMessageText {
    type Response = Message;
    const NAME: &'static str = "editMessageText";
}

#[derive(Clone, Debug, Serialize)]
pub struct SendContact {
    pub chat_id: ChatId,
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendContact {
    pub fn new(
        chat_id: impl Into<ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }
}

impl Request for SendContact {
    type Response = Message;
    const NAME: &'static str = "sendContact";
}

#[derive(Clone, Debug, Serialize)]
pub struct SendDice {
    pub chat_id: ChatId,
    /// The emoji the dice animation is based on; the server default is 🎲.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl SendDice {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            emoji: None,
            disable_notification: None,
            reply_parameters: None,
        }
    }
}

impl Request for SendDice {
    type Response = Message;
    const NAME: &'static str = "sendDice";
}

#[derive(Clone, Debug, Serialize)]
pub struct SendLocation {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    /// Seconds the location keeps updating as a live location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl SendLocation {
    pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            horizontal_accuracy: None,
            live_period: None,
            disable_notification: None,
            reply_parameters: None,
        }
    }
}

impl Request for SendLocation {
    type Response = Message;
    const NAME: &'static str = "sendLocation";
}

#[derive(Clone, Debug, Serialize)]
pub struct SendVenue {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl SendVenue {
    pub fn new(
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            title: title.into(),
            address: address.into(),
            disable_notification: None,
            reply_parameters: None,
        }
    }
}

impl Request for SendVenue {
    type Response = Message;
    const NAME: &'static str = "sendVenue";
}

#[derive(Clone, Debug, Serialize)]
pub struct SendPhoto {
    pub chat_id: ChatId,
    pub photo: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<RawMessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl SendPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo,
            caption: None,
            caption_entities: None,
            disable_notification: None,
            reply_parameters: None,
        }
    }
}

impl Request for SendPhoto {
    type Response = Message;
    const NAME: &'static str = "sendPhoto";
}

#[derive(Clone, Debug, Serialize)]
pub struct SendDocument {
    pub chat_id: ChatId,
    pub document: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<RawMessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
}

impl SendDocument {
    pub fn new(chat_id: impl Into<ChatId>, document: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            document,
            caption: None,
            caption_entities: None,
            disable_notification: None,
            reply_parameters: None,
        }
    }
}

impl Request for SendDocument {
    type Response = Message;
    const NAME: &'static str = "sendDocument";
}

/// Publishes a poll. Built most conveniently through [`SendPoll::from_regular`]
/// or [`SendPoll::from_quiz`].
#[derive(Clone, Debug, Serialize)]
pub struct SendPoll {
    pub chat_id: ChatId,
    pub question: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_multiple_answers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_entities: Option<Vec<RawMessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_parameters: Option<ReplyParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendPoll {
    pub fn new(
        chat_id: impl Into<ChatId>,
        question: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            question: question.into(),
            options,
            is_anonymous: None,
            kind: None,
            allows_multiple_answers: None,
            correct_option_id: None,
            explanation: None,
            explanation_entities: None,
            open_period: None,
            close_date: None,
            is_closed: None,
            disable_notification: None,
            protect_content: None,
            reply_parameters: None,
            reply_markup: None,
        }
    }

    /// The request that would publish `poll` to `chat_id`.
    pub fn from_regular(chat_id: impl Into<ChatId>, poll: &RegularPoll) -> Self {
        let mut request = Self::new(
            chat_id,
            poll.question.clone(),
            poll.options.iter().map(|option| option.text.clone()).collect(),
        );
        request.kind = Some(REGULAR_POLL_TYPE.to_string());
        request.is_anonymous = Some(poll.is_anonymous);
        request.allows_multiple_answers = Some(poll.allow_multiple_answers);
        request.is_closed = Some(poll.is_closed);
        request.schedule_close(poll.scheduled_close_info);
        request
    }

    /// The request that would publish `poll` to `chat_id` as a quiz.
    ///
    /// Quizzes cannot be published without knowing which option is correct,
    /// so a [`QuizPoll`] whose `correct_option_id` is absent is rejected
    /// here, before any network traffic.
    pub fn from_quiz(
        chat_id: impl Into<ChatId>,
        poll: &QuizPoll,
    ) -> Result<Self, UnsupportedPollOperation> {
        let correct_option_id =
            poll.correct_option_id
                .ok_or_else(|| UnsupportedPollOperation::MissingCorrectOption {
                    poll_id: poll.id.clone(),
                })?;

        let mut request = Self::new(
            chat_id,
            poll.question.clone(),
            poll.options.iter().map(|option| option.text.clone()).collect(),
        );
        request.kind = Some(QUIZ_POLL_TYPE.to_string());
        request.is_anonymous = Some(poll.is_anonymous);
        request.correct_option_id = Some(correct_option_id);
        request.explanation = poll.caption.clone();
        if !poll.caption_entities.is_empty() {
            request.explanation_entities = Some(entities::raw_entities(&poll.caption_entities));
        }
        request.is_closed = Some(poll.is_closed);
        request.schedule_close(poll.scheduled_close_info);
        Ok(request)
    }

    /// Carries over a scheduled close time; at most one of
    /// `open_period`/`close_date` is sent.
    pub fn schedule_close(&mut self, info: Option<ScheduledCloseInfo>) {
        self.open_period = info.and_then(|info| info.open_period());
        self.close_date = info.and_then(|info| info.close_date());
    }
}

impl Request for SendPoll {
    type Response = Message;
    const NAME: &'static str = "sendPoll";
}

/// Stops a poll the bot previously sent. The response is the poll in its
/// final, closed state.
#[derive(Clone, Debug, Serialize)]
pub struct StopPoll {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl StopPoll {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            reply_markup: None,
        }
    }
}

impl Request for StopPoll {
    type Response = Poll;
    const NAME: &'static str = "stopPoll";
}
