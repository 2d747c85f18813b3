// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// A wire record was missing a required poll field, or carried one of the
/// wrong shape.
///
/// An unrecognized poll `type` is explicitly not malformed; it decodes to
/// the fallback kind instead.
#[derive(Debug)]
pub struct MalformedPollRecord(serde_json::Error);

impl Error for MalformedPollRecord {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl fmt::Display for MalformedPollRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed poll record: {}", self.0)
    }
}

impl From<serde_json::Error> for MalformedPollRecord {
    fn from(error: serde_json::Error) -> Self {
        Self(error)
    }
}

/// An operation needed an attribute this poll kind does not guarantee to
/// carry.
#[derive(Debug)]
pub enum UnsupportedPollOperation {
    /// Publishing a quiz requires knowing which option is correct.
    MissingCorrectOption { poll_id: String },
    /// Polls of an unrecognized kind cannot be re-sent as typed requests.
    UnknownKind { poll_id: String },
}

impl Error for UnsupportedPollOperation {}

impl fmt::Display for UnsupportedPollOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCorrectOption { poll_id } => write!(
                f,
                "cannot send quiz poll {}: the correct option is not known",
                poll_id
            ),
            Self::UnknownKind { poll_id } => {
                write!(f, "cannot send poll {}: unrecognized poll kind", poll_id)
            }
        }
    }
}
