// Copyright 2024 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rich-text spans ("entities") positioned inside a plain-text string.
//!
//! Telegram positions entities by offset and length counted in UTF-16 code
//! units, not bytes or characters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A formatting annotation as it appears on the wire.
///
/// Payload fields this library does not model (for example the user attached
/// to a `text_mention`) are kept in `extra`, so re-encoding an entity is
/// lossless.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: i64,
    pub length: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawMessageEntity {
    pub(crate) fn to_value(&self) -> Value {
        let mut record = Map::new();
        record.insert("type".into(), Value::String(self.kind.clone()));
        record.insert("offset".into(), Value::from(self.offset));
        record.insert("length".into(), Value::from(self.length));
        if let Some(url) = &self.url {
            record.insert("url".into(), Value::String(url.clone()));
        }
        if let Some(language) = &self.language {
            record.insert("language".into(), Value::String(language.clone()));
        }
        for (key, value) in &self.extra {
            record.insert(key.clone(), value.clone());
        }
        Value::Object(record)
    }
}

/// A raw entity paired with the text it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPart {
    /// The covered substring, re-encoded as UTF-8.
    pub text: String,
    pub entity: RawMessageEntity,
}

/// The length of a string the way Telegram counts it.
pub fn utf16_len(text: &str) -> i64 {
    text.encode_utf16().count() as i64
}

/// Resolves entity positions against `text`, pairing each entity with the
/// substring it covers.
///
/// Entities whose range does not fall within the text (or splits a surrogate
/// pair) are dropped rather than reported as an error.
pub fn parse_entities(text: &str, entities: &[RawMessageEntity]) -> Vec<TextPart> {
    let units: Vec<u16> = text.encode_utf16().collect();
    entities
        .iter()
        .filter_map(|entity| {
            let start = usize::try_from(entity.offset).ok()?;
            let length = usize::try_from(entity.length).ok()?;
            let end = start.checked_add(length)?;
            let text = String::from_utf16(units.get(start..end)?).ok()?;
            Some(TextPart {
                text,
                entity: entity.clone(),
            })
        })
        .collect()
}

/// The inverse of [`parse_entities`]. Positions live on the entity itself,
/// so this is a plain projection.
pub fn raw_entities(parts: &[TextPart]) -> Vec<RawMessageEntity> {
    parts.iter().map(|part| part.entity.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(kind: &str, offset: i64, length: i64) -> RawMessageEntity {
        RawMessageEntity {
            kind: kind.to_string(),
            offset,
            length,
            url: None,
            language: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn parse_leading() {
        let parts = parse_entities("Hello world!", &[entity("bold", 0, 5)]);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].text, "Hello");
    }

    #[test]
    fn parse_emoji() {
        // The crab is two UTF-16 units, so "little 🦀" spans nine.
        let parts = parse_entities("A little 🦀 here", &[entity("bold", 2, 9)]);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].text, "little 🦀");
    }

    #[test]
    fn out_of_range_entities_are_dropped() {
        let parts = parse_entities(
            "short",
            &[entity("bold", 0, 50), entity("italic", -1, 2), entity("code", 1, 2)],
        );
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].text, "ho");
    }

    #[test]
    fn parse_then_project_is_identity() {
        let entities = vec![entity("bold", 0, 5), entity("italic", 6, 5)];
        let parts = parse_entities("Hello world", &entities);
        assert_eq!(raw_entities(&parts), entities);
    }

    #[test]
    fn unmodeled_payload_survives_a_round_trip() {
        let json = r#"{"type":"text_mention","offset":0,"length":4,"user":{"id":7,"is_bot":false,"first_name":"Ann"}}"#;
        let entity: RawMessageEntity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.kind, "text_mention");
        assert!(entity.extra.contains_key("user"));

        let reencoded: Value = serde_json::from_str(json).unwrap();
        assert_eq!(entity.to_value(), reencoded);
        assert_eq!(serde_json::to_value(&entity).unwrap(), reencoded);
    }
}
