// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A file to attach to a request: either the identifier of a file that
/// already lives on Telegram's servers, or an HTTP(S) URL for the server to
/// fetch.
///
/// Both forms travel as a plain string. Uploading local bytes requires a
/// multipart request and is not covered by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFile {
    FileId(String),
    Url(String),
}

impl InputFile {
    pub fn as_str(&self) -> &str {
        match self {
            Self::FileId(value) => value,
            Self::Url(value) => value,
        }
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InputFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value)
        } else {
            Self::FileId(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_forms_travel_as_strings() {
        assert_eq!(
            serde_json::to_string(&InputFile::FileId("AgACAgIAAx".to_string())).unwrap(),
            "\"AgACAgIAAx\"",
        );
        assert_eq!(
            serde_json::from_str::<InputFile>("\"https://example.com/a.png\"").unwrap(),
            InputFile::Url("https://example.com/a.png".to_string()),
        );
        assert_eq!(
            serde_json::from_str::<InputFile>("\"AgACAgIAAx\"").unwrap(),
            InputFile::FileId("AgACAgIAAx".to_string()),
        );
    }
}
