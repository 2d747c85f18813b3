// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::{Deserialize, Serialize};

use crate::message::{Message, User};
use crate::polls::Poll;

/// An incoming event delivered through `getUpdates`.
///
/// Exactly one of the optional payloads is present per update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
    /// A new vote state of a poll the bot sent or can see.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_answer: Option<PollAnswer>,
}

/// A user changed their answer in a non-anonymous poll.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PollAnswer {
    pub poll_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Chosen option indexes; empty when the user retracted their vote.
    pub option_ids: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_update_decodes() {
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 9000,
                "poll": {
                    "id": "p1",
                    "question": "Q?",
                    "options": [{"text": "A", "votesCount": 2}],
                    "total_voter_count": 2,
                    "type": "regular",
                    "is_closed": true
                }
            }"#,
        )
        .unwrap();

        let poll = update.poll.unwrap();
        assert!(poll.is_closed());
        assert_eq!(poll.votes_count(), 2);
    }

    #[test]
    fn retracted_vote_has_no_option_ids() {
        let update: Update = serde_json::from_str(
            r#"{"update_id": 1, "poll_answer": {"poll_id": "p1", "option_ids": []}}"#,
        )
        .unwrap();
        assert_eq!(update.poll_answer.unwrap().option_ids, Vec::<i32>::new());
    }
}
