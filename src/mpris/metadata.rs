use std::collections::HashMap;

use tracing::warn;
use zbus::zvariant::{OwnedValue, Value};

use super::PlayerError;
use crate::models::TrackMetadata;

const TRACK_ID: &str = "mpris:trackid";
const TITLE: &str = "xesam:title";
const ARTIST: &str = "xesam:artist";
const ALBUM: &str = "xesam:album";
const URL: &str = "xesam:url";
const LENGTH: &str = "mpris:length";

/// Decode an MPRIS `Metadata` map. Every field except the URL is required.
pub fn decode(metadata: &HashMap<String, OwnedValue>) -> Result<TrackMetadata, PlayerError> {
    Ok(TrackMetadata {
        track_id: required(metadata, TRACK_ID, as_text)?,
        title: required(metadata, TITLE, as_text)?,
        artist: required(metadata, ARTIST, first_text)?,
        album: required(metadata, ALBUM, as_text)?,
        url: metadata.get(URL).and_then(|value| as_text(value)),
        length_micros: required(metadata, LENGTH, as_micros)?,
    })
}

fn required<T>(
    metadata: &HashMap<String, OwnedValue>,
    key: &'static str,
    read: fn(&Value<'_>) -> Option<T>,
) -> Result<T, PlayerError> {
    metadata
        .get(key)
        .and_then(|value| read(value))
        .ok_or(PlayerError::MetadataUnavailable { key })
}

fn as_text(value: &Value<'_>) -> Option<String> {
    match value {
        Value::Str(s) => Some(s.as_str().to_string()),
        Value::ObjectPath(path) => Some(path.as_str().to_string()),
        Value::Value(inner) => as_text(inner),
        _ => None,
    }
}

// xesam:artist is a string list; some players send a bare string.
fn first_text(value: &Value<'_>) -> Option<String> {
    match value {
        Value::Array(array) => array.iter().find_map(as_text),
        Value::Value(inner) => first_text(inner),
        other => as_text(other),
    }
}

fn as_micros(value: &Value<'_>) -> Option<u64> {
    let signed = match value {
        Value::U64(n) => return Some(*n),
        Value::U32(n) => return Some(u64::from(*n)),
        Value::I64(n) => *n,
        Value::I32(n) => i64::from(*n),
        Value::Value(inner) => return as_micros(inner),
        _ => return None,
    };
    Some(u64::try_from(signed).unwrap_or_else(|_| {
        warn!("Player reported negative track length {signed}");
        0
    }))
}
