// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::{Deserialize, Serialize};

use crate::entities::RawMessageEntity;
use crate::polls::Poll;

/// Where to address a request: a numeric chat identifier, or the `@username`
/// of a public chat or channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl From<&Chat> for ChatId {
    fn from(chat: &Chat) -> Self {
        Self::Id(chat.id)
    }
}

/// A Telegram user or bot account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// One of `private`, `group`, `supergroup` or `channel`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// A message, treated as a snapshot in time: edits arrive as new values and
/// never mutate one already held.
///
/// Only the fields this library works with are modelled; anything else on
/// the wire is ignored on decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// Unix time the message was sent.
    pub date: i64,
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<RawMessageEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
}

/// Targets an existing message when sending a reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplyParameters {
    pub message_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<ChatId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
}

impl ReplyParameters {
    /// Reply to the given message in its own chat.
    pub fn to(message: &Message) -> Self {
        Self {
            message_id: message.message_id,
            chat_id: Some(ChatId::Id(message.chat.id)),
            allow_sending_without_reply: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_with_poll_decodes_transparently() {
        let message: Message = serde_json::from_str(
            r#"{
                "message_id": 3,
                "date": 1700000000,
                "chat": {"id": 42, "type": "group", "title": "quiz night"},
                "poll": {
                    "id": "p1",
                    "question": "Q?",
                    "options": [{"text": "A", "votesCount": 0}],
                    "total_voter_count": 0,
                    "type": "quiz",
                    "correct_option_id": 0
                }
            }"#,
        )
        .unwrap();

        assert_eq!(message.chat.id, 42);
        match message.poll {
            Some(Poll::Quiz(poll)) => assert_eq!(poll.correct_option_id, Some(0)),
            other => panic!("expected a quiz poll, got {:?}", other),
        }
    }

    #[test]
    fn unknown_wire_fields_are_ignored() {
        let message: Message = serde_json::from_str(
            r#"{"message_id": 1, "date": 0, "chat": {"id": 1, "type": "private"}, "brand_new_field": 9}"#,
        )
        .unwrap();
        assert_eq!(message.text, None);
    }

    #[test]
    fn chat_id_forms() {
        assert_eq!(
            serde_json::to_string(&ChatId::from(7)).unwrap(),
            "7",
        );
        assert_eq!(
            serde_json::to_string(&ChatId::from("@rustlang")).unwrap(),
            "\"@rustlang\"",
        );
    }
}
