//! Refresh messages received on the control socket.
//!
//! A message is one line of JSON. The canonical envelope is
//!
//! ```json
//! {"type":"message","data":{"action":"refresh","image":"/tmp/a.png","orientation":90}}
//! ```
//!
//! but a bare object carrying the `data` fields at top level is accepted too.
//! Orientation and offsets are lenient: numbers and numeric strings both work,
//! anything else is dropped with a [`ParameterWarning`] and the request falls
//! back to automatic placement for that field.

use panel_render::{Orientation, RenderRequest};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// The only action the daemon performs.
pub const REFRESH_ACTION: &str = "refresh";

/// A message that cannot be acted on at all.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Message must be a JSON object")]
    NotAnObject,

    #[error("Unsupported message type '{0}'")]
    UnsupportedType(String),

    #[error("Message has no action")]
    MissingAction,

    #[error("The only supported action is 'refresh', got '{0}'")]
    UnsupportedAction(String),

    #[error("Message has no image path")]
    MissingImage,
}

/// A parameter that was ignored; the request still proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterWarning {
    #[error("Ignoring orientation {value}: supported orientations are 0, 90, 180 and 270")]
    Orientation { value: String },

    #[error("Ignoring {field} {value}: not an integer")]
    Offset { field: &'static str, value: String },
}

/// A validated refresh request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshMessage {
    pub image: PathBuf,
    pub request: RenderRequest,
}

/// Result of parsing one line: the request plus any ignored parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub refresh: RefreshMessage,
    pub warnings: Vec<ParameterWarning>,
}

#[derive(Debug, Default, Deserialize)]
struct RawRefresh {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    orientation: Option<Value>,
    #[serde(default)]
    offset_x: Option<Value>,
    #[serde(default)]
    offset_y: Option<Value>,
}

/// Parse one line received on the socket.
pub fn parse_message(line: &str) -> Result<ParsedMessage, MessageError> {
    let value: Value = serde_json::from_str(line.trim())?;
    let Value::Object(mut object) = value else {
        return Err(MessageError::NotAnObject);
    };

    let body = match object.remove("type") {
        Some(Value::String(kind)) if kind == "message" => {
            object.remove("data").ok_or(MessageError::MissingAction)?
        }
        Some(other) => {
            let kind = match other {
                Value::String(s) => s,
                v => v.to_string(),
            };
            return Err(MessageError::UnsupportedType(kind));
        }
        None => match object.remove("data") {
            Some(data) => data,
            None => Value::Object(object),
        },
    };

    if !body.is_object() {
        return Err(MessageError::NotAnObject);
    }
    let raw: RawRefresh = serde_json::from_value(body)?;

    let action = raw.action.ok_or(MessageError::MissingAction)?;
    if !action.trim().eq_ignore_ascii_case(REFRESH_ACTION) {
        return Err(MessageError::UnsupportedAction(action));
    }

    let image = raw
        .image
        .filter(|path| !path.trim().is_empty())
        .ok_or(MessageError::MissingImage)?;

    let mut warnings = Vec::new();
    let mut request = RenderRequest::default();

    if let Some(value) = raw.orientation.filter(|v| !v.is_null()) {
        match parse_orientation(&value) {
            Some(orientation) => request.orientation = Some(orientation),
            None => warnings.push(ParameterWarning::Orientation {
                value: display_value(&value),
            }),
        }
    }

    for (field, value, slot) in [
        ("offset_x", raw.offset_x, &mut request.offset_x),
        ("offset_y", raw.offset_y, &mut request.offset_y),
    ] {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            continue;
        };
        match lenient_integer(&value) {
            Some(offset) => *slot = Some(offset),
            None => warnings.push(ParameterWarning::Offset {
                field,
                value: display_value(&value),
            }),
        }
    }

    Ok(ParsedMessage {
        refresh: RefreshMessage {
            image: PathBuf::from(image),
            request,
        },
        warnings,
    })
}

/// Accept an integer number or a string holding one.
pub fn lenient_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_orientation(value: &Value) -> Option<Orientation> {
    lenient_integer(value).and_then(Orientation::from_degrees)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}
