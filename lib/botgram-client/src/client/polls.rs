// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to sending and stopping polls.

use botgram_types::{
    ChatId, Message, Poll, QuizPoll, RegularPoll, ReplyParameters, UnsupportedPollOperation,
};

use super::Bot;
use crate::errors::{InvocationError, SendPollError};
use crate::requests::{SendPoll, StopPoll};

impl Bot {
    /// Publishes a regular poll.
    pub async fn send_regular_poll(
        &self,
        chat: impl Into<ChatId>,
        poll: &RegularPoll,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendPoll::from_regular(chat, poll)).await
    }

    /// Publishes a quiz.
    ///
    /// Fails before any network traffic when the quiz does not carry its
    /// correct option; see [`SendPoll::from_quiz`].
    pub async fn send_quiz_poll(
        &self,
        chat: impl Into<ChatId>,
        poll: &QuizPoll,
    ) -> Result<Message, SendPollError> {
        let request = SendPoll::from_quiz(chat, poll)?;
        Ok(self.invoke(&request).await?)
    }

    /// Replies to a message with a copy of the given poll.
    ///
    /// Polls of an unrecognized kind cannot be re-sent: the typed request
    /// has no way to express their extra fields.
    pub async fn reply_with_poll(
        &self,
        to: &Message,
        poll: &Poll,
    ) -> Result<Message, SendPollError> {
        let mut request = match poll {
            Poll::Regular(poll) => SendPoll::from_regular(to.chat.id, poll),
            Poll::Quiz(poll) => SendPoll::from_quiz(to.chat.id, poll)?,
            Poll::Unknown(poll) => {
                return Err(UnsupportedPollOperation::UnknownKind {
                    poll_id: poll.id.clone(),
                }
                .into());
            }
        };
        request.reply_parameters = Some(ReplyParameters::to(to));
        Ok(self.invoke(&request).await?)
    }

    /// Stops a poll the bot previously sent, returning its final state.
    pub async fn stop_poll(
        &self,
        chat: impl Into<ChatId>,
        message_id: i64,
    ) -> Result<Poll, InvocationError> {
        self.invoke(&StopPoll::new(chat, message_id)).await
    }
}
