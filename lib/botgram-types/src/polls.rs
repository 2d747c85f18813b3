// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The poll model and its wire codec.
//!
//! Polls arrive as a flat JSON object whose `type` field decides which
//! concrete kind they are. Kinds this library does not know about decode to
//! [`UnknownPollType`], which keeps the received object verbatim so that
//! re-encoding it is lossless.

use chrono::{DateTime, TimeDelta, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::entities::{self, RawMessageEntity, TextPart};
use crate::errors::MalformedPollRecord;

/// A poll as it travels on the wire: a flat JSON object.
pub type RawPollRecord = Map<String, Value>;

/// Discriminator value of [`RegularPoll`] on the wire.
pub const REGULAR_POLL_TYPE: &str = "regular";
/// Discriminator value of [`QuizPoll`] on the wire.
pub const QUIZ_POLL_TYPE: &str = "quiz";

/// A single answer option of a poll. The order of options is the order they
/// are displayed and voted in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    #[serde(rename = "votesCount")]
    pub votes_count: i32,
}

/// When a poll is scheduled to stop accepting votes.
///
/// The variant decides only the wire representation (an absolute `close_date`
/// versus a relative `open_period`); both expose the same derived close time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduledCloseInfo {
    Exact(ExactScheduledCloseInfo),
    Approximate(ApproximateScheduledCloseInfo),
}

impl ScheduledCloseInfo {
    /// The moment the poll stops accepting votes.
    pub fn close_date_time(&self) -> DateTime<Utc> {
        match self {
            Self::Exact(info) => info.close_date_time,
            Self::Approximate(info) => info.close_date_time,
        }
    }

    /// Seconds until close, when the close time is relative. Truncated to
    /// whole seconds, as sent on the wire.
    pub fn open_period(&self) -> Option<i64> {
        match self {
            Self::Exact(_) => None,
            Self::Approximate(info) => Some(info.open_duration.num_seconds()),
        }
    }

    /// The close time in Unix seconds, when it is absolute.
    pub fn close_date(&self) -> Option<i64> {
        match self {
            Self::Exact(info) => Some(info.close_date_time.timestamp()),
            Self::Approximate(_) => None,
        }
    }
}

/// A scheduled close carried on the wire as an absolute Unix timestamp
/// (`close_date`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExactScheduledCloseInfo {
    pub close_date_time: DateTime<Utc>,
}

impl ExactScheduledCloseInfo {
    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self {
            close_date_time: datetime_from_unix(seconds),
        }
    }
}

/// A scheduled close carried on the wire as a duration (`open_period`)
/// relative to the moment the snapshot was decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApproximateScheduledCloseInfo {
    pub open_duration: TimeDelta,
    pub start_point: DateTime<Utc>,
    close_date_time: DateTime<Utc>,
}

impl ApproximateScheduledCloseInfo {
    /// Starts the countdown now.
    pub fn new(open_duration: TimeDelta) -> Self {
        Self::starting_at(open_duration, Utc::now())
    }

    /// The close time is derived here, once, and never recomputed.
    pub fn starting_at(open_duration: TimeDelta, start_point: DateTime<Utc>) -> Self {
        Self {
            open_duration,
            start_point,
            close_date_time: start_point
                .checked_add_signed(open_duration)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn close_date_time(&self) -> DateTime<Utc> {
        self.close_date_time
    }
}

// Timestamps outside chrono's representable range saturate.
fn datetime_from_unix(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap_or(if seconds < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Capability of poll kinds that can accept several answers from one voter.
pub trait MultipleAnswersPoll {
    fn allow_multiple_answers(&self) -> bool;
}

/// A poll, as a snapshot in time.
///
/// A state change (new votes, closing) arrives as a brand-new decoded value;
/// a `Poll` already held is never updated in place.
#[derive(Clone, Debug, PartialEq)]
pub enum Poll {
    Regular(RegularPoll),
    Quiz(QuizPoll),
    /// Any poll whose `type` this library does not recognize. Decoding such
    /// a poll never fails; this is the forward-compatibility path for kinds
    /// added to the Bot API before the library learns about them.
    Unknown(UnknownPollType),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegularPoll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub votes_count: i32,
    pub is_closed: bool,
    pub is_anonymous: bool,
    pub allow_multiple_answers: bool,
    pub scheduled_close_info: Option<ScheduledCloseInfo>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizPoll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub votes_count: i32,
    /// Absent polls are possible per the Bot API's own documentation, for
    /// example when the quiz is closed or was forwarded.
    pub correct_option_id: Option<i32>,
    /// The explanation shown after answering, if any.
    pub caption: Option<String>,
    /// Formatting spans of `caption`, resolved against its text.
    pub caption_entities: Vec<TextPart>,
    pub is_closed: bool,
    pub is_anonymous: bool,
    pub scheduled_close_info: Option<ScheduledCloseInfo>,
}

/// A poll of a kind this library does not model.
///
/// The common attributes are decoded as usual; everything else stays inside
/// the retained wire record, which [`Poll::to_raw`] re-emits verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownPollType {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub votes_count: i32,
    pub is_closed: bool,
    pub is_anonymous: bool,
    /// The wire record exactly as received.
    pub raw: RawPollRecord,
    scheduled_close_info: Option<ScheduledCloseInfo>,
}

impl UnknownPollType {
    /// Computed by re-inspecting the retained record at decode time.
    pub fn scheduled_close_info(&self) -> Option<ScheduledCloseInfo> {
        self.scheduled_close_info
    }
}

impl MultipleAnswersPoll for RegularPoll {
    fn allow_multiple_answers(&self) -> bool {
        self.allow_multiple_answers
    }
}

/// The typed intermediate every known poll kind decodes through.
#[derive(Deserialize)]
struct RawPoll {
    id: String,
    question: String,
    options: Vec<PollOption>,
    #[serde(rename = "total_voter_count")]
    votes_count: i32,
    #[serde(rename = "is_closed", default)]
    is_closed: bool,
    #[serde(rename = "is_anonymous", default)]
    is_anonymous: bool,
    #[serde(rename = "allows_multiple_answers", default)]
    allow_multiple_answers: bool,
    #[serde(rename = "correct_option_id", default)]
    correct_option_id: Option<i32>,
    #[serde(rename = "explanation", default)]
    caption: Option<String>,
    #[serde(rename = "explanation_entities", default)]
    caption_entities: Vec<RawMessageEntity>,
    #[serde(rename = "open_period", default)]
    open_period: Option<i64>,
    #[serde(rename = "close_date", default)]
    close_date: Option<i64>,
}

impl RawPoll {
    // An absolute close date wins over a relative open period when the wire
    // carries both.
    fn scheduled_close_info(&self, now: DateTime<Utc>) -> Option<ScheduledCloseInfo> {
        if let Some(seconds) = self.close_date {
            Some(ScheduledCloseInfo::Exact(
                ExactScheduledCloseInfo::from_unix_seconds(seconds),
            ))
        } else {
            self.open_period.map(|seconds| {
                ScheduledCloseInfo::Approximate(ApproximateScheduledCloseInfo::starting_at(
                    TimeDelta::seconds(seconds),
                    now,
                ))
            })
        }
    }
}

// Same priority rule as `RawPoll::scheduled_close_info`, applied directly to
// the raw record. Unknown polls do not trust the typed intermediate.
fn scheduled_close_info_of(
    record: &RawPollRecord,
    now: DateTime<Utc>,
) -> Option<ScheduledCloseInfo> {
    if let Some(seconds) = record.get("close_date").and_then(Value::as_i64) {
        Some(ScheduledCloseInfo::Exact(
            ExactScheduledCloseInfo::from_unix_seconds(seconds),
        ))
    } else {
        record
            .get("open_period")
            .and_then(Value::as_i64)
            .map(|seconds| {
                ScheduledCloseInfo::Approximate(ApproximateScheduledCloseInfo::starting_at(
                    TimeDelta::seconds(seconds),
                    now,
                ))
            })
    }
}

impl Poll {
    /// Common attribute: the opaque poll identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Regular(poll) => &poll.id,
            Self::Quiz(poll) => &poll.id,
            Self::Unknown(poll) => &poll.id,
        }
    }

    pub fn question(&self) -> &str {
        match self {
            Self::Regular(poll) => &poll.question,
            Self::Quiz(poll) => &poll.question,
            Self::Unknown(poll) => &poll.question,
        }
    }

    pub fn options(&self) -> &[PollOption] {
        match self {
            Self::Regular(poll) => &poll.options,
            Self::Quiz(poll) => &poll.options,
            Self::Unknown(poll) => &poll.options,
        }
    }

    /// Total amount of votes cast so far.
    pub fn votes_count(&self) -> i32 {
        match self {
            Self::Regular(poll) => poll.votes_count,
            Self::Quiz(poll) => poll.votes_count,
            Self::Unknown(poll) => poll.votes_count,
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            Self::Regular(poll) => poll.is_closed,
            Self::Quiz(poll) => poll.is_closed,
            Self::Unknown(poll) => poll.is_closed,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        match self {
            Self::Regular(poll) => poll.is_anonymous,
            Self::Quiz(poll) => poll.is_anonymous,
            Self::Unknown(poll) => poll.is_anonymous,
        }
    }

    pub fn scheduled_close_info(&self) -> Option<ScheduledCloseInfo> {
        match self {
            Self::Regular(poll) => poll.scheduled_close_info,
            Self::Quiz(poll) => poll.scheduled_close_info,
            Self::Unknown(poll) => poll.scheduled_close_info,
        }
    }

    /// Decodes a wire record, reading the wall clock for the start point of
    /// a relative close time.
    pub fn from_raw(record: RawPollRecord) -> Result<Self, MalformedPollRecord> {
        Self::from_raw_at(record, Utc::now())
    }

    /// Decodes a wire record with an explicit decode time.
    ///
    /// `now` only matters when the record schedules its close with
    /// `open_period`: the resulting close time is `now + open_period`,
    /// modelling "the close time as seen from the moment this snapshot was
    /// received".
    pub fn from_raw_at(
        record: RawPollRecord,
        now: DateTime<Utc>,
    ) -> Result<Self, MalformedPollRecord> {
        let raw: RawPoll = serde_json::from_value(Value::Object(record.clone()))
            .map_err(MalformedPollRecord::from)?;

        Ok(match record.get("type").and_then(Value::as_str) {
            Some(QUIZ_POLL_TYPE) => {
                let caption_entities = match raw.caption.as_deref() {
                    Some(caption) => entities::parse_entities(caption, &raw.caption_entities),
                    None => Vec::new(),
                };
                Self::Quiz(QuizPoll {
                    scheduled_close_info: raw.scheduled_close_info(now),
                    id: raw.id,
                    question: raw.question,
                    options: raw.options,
                    votes_count: raw.votes_count,
                    correct_option_id: raw.correct_option_id,
                    caption: raw.caption,
                    caption_entities,
                    is_closed: raw.is_closed,
                    is_anonymous: raw.is_anonymous,
                })
            }
            Some(REGULAR_POLL_TYPE) => Self::Regular(RegularPoll {
                scheduled_close_info: raw.scheduled_close_info(now),
                id: raw.id,
                question: raw.question,
                options: raw.options,
                votes_count: raw.votes_count,
                is_closed: raw.is_closed,
                is_anonymous: raw.is_anonymous,
                allow_multiple_answers: raw.allow_multiple_answers,
            }),
            // A missing or non-string `type` takes this path as well.
            _ => Self::Unknown(UnknownPollType {
                scheduled_close_info: scheduled_close_info_of(&record, now),
                id: raw.id,
                question: raw.question,
                options: raw.options,
                votes_count: raw.votes_count,
                is_closed: raw.is_closed,
                is_anonymous: raw.is_anonymous,
                raw: record,
            }),
        })
    }

    /// Encodes back into a wire record.
    ///
    /// Unknown polls re-emit their retained record verbatim. For the other
    /// kinds, a relative close time becomes `open_period` and an absolute one
    /// `close_date`, both truncated to whole seconds.
    pub fn to_raw(&self) -> RawPollRecord {
        // TODO quizzes are currently emitted with `type: "regular"`; confirm
        // what the server expects before changing this.
        match self {
            Self::Unknown(poll) => poll.raw.clone(),
            Self::Regular(poll) => {
                let mut record = encode_common(
                    &poll.id,
                    &poll.question,
                    &poll.options,
                    poll.votes_count,
                    poll.is_closed,
                    poll.is_anonymous,
                );
                record.insert(
                    "allows_multiple_answers".into(),
                    Value::Bool(poll.allow_multiple_answers),
                );
                encode_close_info(&mut record, poll.scheduled_close_info);
                record
            }
            Self::Quiz(poll) => {
                let mut record = encode_common(
                    &poll.id,
                    &poll.question,
                    &poll.options,
                    poll.votes_count,
                    poll.is_closed,
                    poll.is_anonymous,
                );
                if let Some(correct_option_id) = poll.correct_option_id {
                    record.insert("correct_option_id".into(), Value::from(correct_option_id));
                }
                if let Some(caption) = &poll.caption {
                    record.insert("explanation".into(), Value::String(caption.clone()));
                }
                if !poll.caption_entities.is_empty() {
                    record.insert(
                        "explanation_entities".into(),
                        Value::Array(
                            entities::raw_entities(&poll.caption_entities)
                                .iter()
                                .map(RawMessageEntity::to_value)
                                .collect(),
                        ),
                    );
                }
                encode_close_info(&mut record, poll.scheduled_close_info);
                record
            }
        }
    }
}

fn encode_common(
    id: &str,
    question: &str,
    options: &[PollOption],
    votes_count: i32,
    is_closed: bool,
    is_anonymous: bool,
) -> RawPollRecord {
    let mut record = RawPollRecord::new();
    record.insert("id".into(), Value::String(id.to_string()));
    record.insert("question".into(), Value::String(question.to_string()));
    record.insert(
        "options".into(),
        Value::Array(
            options
                .iter()
                .map(|option| {
                    let mut record = RawPollRecord::new();
                    record.insert("text".into(), Value::String(option.text.clone()));
                    record.insert("votesCount".into(), Value::from(option.votes_count));
                    Value::Object(record)
                })
                .collect(),
        ),
    );
    record.insert("total_voter_count".into(), Value::from(votes_count));
    record.insert("is_closed".into(), Value::Bool(is_closed));
    record.insert("is_anonymous".into(), Value::Bool(is_anonymous));
    record.insert("type".into(), Value::String(REGULAR_POLL_TYPE.to_string()));
    record
}

// At most one of `open_period`/`close_date` is emitted.
fn encode_close_info(record: &mut RawPollRecord, info: Option<ScheduledCloseInfo>) {
    match info {
        Some(ScheduledCloseInfo::Approximate(info)) => {
            record.insert(
                "open_period".into(),
                Value::from(info.open_duration.num_seconds()),
            );
        }
        Some(ScheduledCloseInfo::Exact(info)) => {
            record.insert(
                "close_date".into(),
                Value::from(info.close_date_time.timestamp()),
            );
        }
        None => {}
    }
}

impl Serialize for Poll {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Poll {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = RawPollRecord::deserialize(deserializer)?;
        Self::from_raw(record).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> RawPollRecord {
        match serde_json::from_str(json).unwrap() {
            Value::Object(record) => record,
            _ => panic!("not a JSON object"),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_600_000_000, 0).unwrap()
    }

    #[test]
    fn decode_regular_with_close_date() {
        let poll = Poll::from_raw(record(
            r#"{"id":"p1","question":"Q?","options":[{"text":"A","votesCount":3},{"text":"B","votesCount":1}],"total_voter_count":4,"type":"regular","allows_multiple_answers":true,"close_date":1700000000}"#,
        ))
        .unwrap();

        let poll = match poll {
            Poll::Regular(poll) => poll,
            other => panic!("expected a regular poll, got {:?}", other),
        };
        assert_eq!(poll.id, "p1");
        assert_eq!(poll.question, "Q?");
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.options[0].text, "A");
        assert_eq!(poll.options[0].votes_count, 3);
        assert_eq!(poll.votes_count, 4);
        assert!(poll.allow_multiple_answers);
        assert_eq!(
            poll.scheduled_close_info,
            Some(ScheduledCloseInfo::Exact(ExactScheduledCloseInfo {
                close_date_time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            }))
        );
    }

    #[test]
    fn close_date_wins_over_open_period() {
        let poll = Poll::from_raw_at(
            record(
                r#"{"id":"p","question":"Q?","options":[],"total_voter_count":0,"type":"regular","close_date":1700000000,"open_period":600}"#,
            ),
            fixed_now(),
        )
        .unwrap();

        match poll.scheduled_close_info() {
            Some(ScheduledCloseInfo::Exact(info)) => {
                assert_eq!(info.close_date_time.timestamp(), 1_700_000_000);
            }
            other => panic!("expected an exact close time, got {:?}", other),
        }
    }

    #[test]
    fn open_period_counts_from_decode_time() {
        let now = fixed_now();
        let poll = Poll::from_raw_at(
            record(
                r#"{"id":"p","question":"Q?","options":[],"total_voter_count":0,"type":"regular","open_period":300}"#,
            ),
            now,
        )
        .unwrap();

        match poll.scheduled_close_info() {
            Some(ScheduledCloseInfo::Approximate(info)) => {
                assert_eq!(info.start_point, now);
                assert_eq!(info.open_duration, TimeDelta::seconds(300));
                assert_eq!(info.close_date_time(), now + TimeDelta::seconds(300));
            }
            other => panic!("expected an approximate close time, got {:?}", other),
        }
    }

    #[test]
    fn omitted_flags_default_to_false() {
        let poll = Poll::from_raw(record(
            r#"{"id":"p","question":"Q?","options":[],"total_voter_count":0,"type":"regular"}"#,
        ))
        .unwrap();

        assert!(!poll.is_closed());
        assert!(!poll.is_anonymous());
        match poll {
            Poll::Regular(poll) => assert!(!poll.allow_multiple_answers),
            other => panic!("expected a regular poll, got {:?}", other),
        }
    }

    #[test]
    fn unrecognized_type_degrades_gracefully() {
        let poll = Poll::from_raw_at(
            record(
                r#"{"id":"p","question":"Q?","options":[{"text":"A","votesCount":1}],"total_voter_count":1,"is_anonymous":true,"type":"super_poll_v9","open_period":120,"shiny":true}"#,
            ),
            fixed_now(),
        )
        .unwrap();

        let poll = match poll {
            Poll::Unknown(poll) => poll,
            other => panic!("expected the fallback kind, got {:?}", other),
        };
        assert_eq!(poll.id, "p");
        assert_eq!(poll.votes_count, 1);
        assert!(poll.is_anonymous);
        match poll.scheduled_close_info() {
            Some(ScheduledCloseInfo::Approximate(info)) => {
                assert_eq!(info.open_duration, TimeDelta::seconds(120));
            }
            other => panic!("expected an approximate close time, got {:?}", other),
        }
    }

    #[test]
    fn missing_type_is_not_an_error() {
        let poll = Poll::from_raw(record(
            r#"{"id":"p","question":"Q?","options":[],"total_voter_count":0}"#,
        ))
        .unwrap();
        assert!(matches!(poll, Poll::Unknown(_)));
    }

    #[test]
    fn unknown_poll_reencodes_verbatim() {
        let json = r#"{"id":"p","question":"Q?","options":[{"text":"A","votesCount":1}],"total_voter_count":1,"type":"super_poll_v9","some_future_field":{"nested":[1,2,3]},"close_date":1700000000}"#;
        let original = record(json);
        let poll = Poll::from_raw(original.clone()).unwrap();

        assert_eq!(poll.to_raw(), original);
        // With `preserve_order` enabled the retained record serializes back
        // to the exact bytes that were received.
        assert_eq!(
            serde_json::to_string(&Value::Object(poll.to_raw())).unwrap(),
            json,
        );
    }

    #[test]
    fn regular_poll_round_trips() {
        let poll = Poll::Regular(RegularPoll {
            id: "57".to_string(),
            question: "Best crab?".to_string(),
            options: vec![
                PollOption {
                    text: "Ferris".to_string(),
                    votes_count: 10,
                },
                PollOption {
                    text: "Other".to_string(),
                    votes_count: 0,
                },
            ],
            votes_count: 10,
            is_closed: false,
            is_anonymous: true,
            allow_multiple_answers: true,
            scheduled_close_info: Some(ScheduledCloseInfo::Exact(
                ExactScheduledCloseInfo::from_unix_seconds(1_700_000_000),
            )),
        });

        let decoded = Poll::from_raw(poll.to_raw()).unwrap();
        assert_eq!(decoded, poll);
    }

    #[test]
    fn quiz_fields_are_encoded() {
        let caption = "Because maths".to_string();
        let raw_entity = RawMessageEntity {
            kind: "bold".to_string(),
            offset: 0,
            length: 7,
            url: None,
            language: None,
            extra: Map::new(),
        };
        let poll = Poll::Quiz(QuizPoll {
            id: "q".to_string(),
            question: "2 + 2?".to_string(),
            options: vec![
                PollOption {
                    text: "4".to_string(),
                    votes_count: 2,
                },
                PollOption {
                    text: "5".to_string(),
                    votes_count: 1,
                },
            ],
            votes_count: 3,
            correct_option_id: Some(0),
            caption_entities: entities::parse_entities(&caption, &[raw_entity.clone()]),
            caption: Some(caption),
            is_closed: false,
            is_anonymous: false,
            scheduled_close_info: None,
        });

        let encoded = poll.to_raw();
        assert_eq!(encoded.get("correct_option_id"), Some(&Value::from(0)));
        assert_eq!(
            encoded.get("explanation"),
            Some(&Value::String("Because maths".to_string()))
        );
        assert_eq!(
            encoded.get("explanation_entities"),
            Some(&Value::Array(vec![raw_entity.to_value()]))
        );
        // Encoding currently marks quizzes as regular; see `Poll::to_raw`.
        assert_eq!(
            encoded.get("type"),
            Some(&Value::String("regular".to_string()))
        );
        assert!(!encoded.contains_key("open_period"));
        assert!(!encoded.contains_key("close_date"));
    }

    #[test]
    fn quiz_attributes_survive_the_wire() {
        let poll = QuizPoll {
            id: "q".to_string(),
            question: "2 + 2?".to_string(),
            options: vec![PollOption {
                text: "4".to_string(),
                votes_count: 2,
            }],
            votes_count: 2,
            correct_option_id: Some(0),
            caption: Some("obvious".to_string()),
            caption_entities: Vec::new(),
            is_closed: true,
            is_anonymous: true,
            scheduled_close_info: Some(ScheduledCloseInfo::Exact(
                ExactScheduledCloseInfo::from_unix_seconds(1_700_000_000),
            )),
        };

        // Flip the discriminator back to decode through the quiz arm; encode
        // itself writes "regular" (see `Poll::to_raw`).
        let mut encoded = Poll::Quiz(poll.clone()).to_raw();
        encoded.insert("type".into(), Value::String(QUIZ_POLL_TYPE.to_string()));

        match Poll::from_raw(encoded).unwrap() {
            Poll::Quiz(decoded) => assert_eq!(decoded, poll),
            other => panic!("expected a quiz, got {:?}", other),
        }
    }

    #[test]
    fn quiz_caption_entities_require_a_caption() {
        let poll = Poll::from_raw(record(
            r#"{"id":"q","question":"Q?","options":[],"total_voter_count":0,"type":"quiz","explanation_entities":[{"type":"bold","offset":0,"length":3}]}"#,
        ))
        .unwrap();

        match poll {
            Poll::Quiz(poll) => {
                assert_eq!(poll.caption, None);
                assert_eq!(poll.caption_entities, Vec::new());
            }
            other => panic!("expected a quiz, got {:?}", other),
        }
    }

    #[test]
    fn quiz_caption_entities_are_resolved() {
        let poll = Poll::from_raw(record(
            r#"{"id":"q","question":"Q?","options":[],"total_voter_count":0,"type":"quiz","explanation":"Because maths","explanation_entities":[{"type":"bold","offset":0,"length":7}]}"#,
        ))
        .unwrap();

        match poll {
            Poll::Quiz(poll) => {
                assert_eq!(poll.caption_entities.len(), 1);
                assert_eq!(poll.caption_entities[0].text, "Because");
                assert_eq!(poll.caption_entities[0].entity.kind, "bold");
            }
            other => panic!("expected a quiz, got {:?}", other),
        }
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let result = Poll::from_raw(record(r#"{"id":"p","options":[],"total_voter_count":0}"#));
        assert!(result.is_err());

        let result = Poll::from_raw(record(
            r#"{"id":"p","question":"Q?","options":"oops","total_voter_count":0,"type":"regular"}"#,
        ));
        assert!(result.is_err());
    }

    #[test]
    fn sub_second_precision_truncates() {
        let info = ApproximateScheduledCloseInfo::starting_at(
            TimeDelta::milliseconds(90_700),
            fixed_now(),
        );
        assert_eq!(
            ScheduledCloseInfo::Approximate(info).open_period(),
            Some(90)
        );

        let info = ExactScheduledCloseInfo {
            close_date_time: DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap(),
        };
        assert_eq!(
            ScheduledCloseInfo::Exact(info).close_date(),
            Some(1_700_000_000)
        );
    }

    #[test]
    fn poll_deserializes_through_serde() {
        let poll: Poll = serde_json::from_str(
            r#"{"id":"p","question":"Q?","options":[],"total_voter_count":0,"type":"regular"}"#,
        )
        .unwrap();
        assert!(matches!(poll, Poll::Regular(_)));

        let encoded = serde_json::to_value(&poll).unwrap();
        assert_eq!(encoded["type"], Value::String("regular".to_string()));
    }
}
