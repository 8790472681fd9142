//! Structured encoding of [`CompositeError`] and its decoded counterpart [`ErrorData`].

use super::CompositeError;
use crate::types::{DetailList, EncodeError, ErrorCollector, ErrorConstant, Map, SharedError, StackFrame, StackTrace};
use core::error::Error as StdError;
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const KEY_CODE: &str = "error_code";
pub const KEY_MESSAGE: &str = "error_message";
pub const KEY_DETAILS: &str = "error_details";
pub const KEY_CAUSE: &str = "error_cause";
pub const KEY_STACK: &str = "error_stack";

/// Keys owned by the structured encoding. Context entries using any of them,
/// compared case-insensitively, are dropped.
pub const RESERVED_KEYS: [&str; 5] = [KEY_CODE, KEY_MESSAGE, KEY_DETAILS, KEY_CAUSE, KEY_STACK];

pub(crate) fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.iter().any(|reserved| reserved.eq_ignore_ascii_case(key))
}

pub(crate) fn without_reserved(mut context: Map) -> Map {
    context.retain(|key, _| {
        let reserved = is_reserved(key);
        #[cfg(feature = "tracing")]
        {
            if reserved {
                tracing::debug!(key = %key, "dropping reserved context key");
            }
        }
        !reserved
    });
    context
}

/// Serializes an arbitrary error: composite errors and collectors nest as
/// structured values, anything else becomes its display string.
pub(crate) struct ErrorValue<'a>(pub(crate) &'a (dyn StdError + 'static));

impl Serialize for ErrorValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(error) = self.0.downcast_ref::<CompositeError>() {
            return error.serialize(serializer);
        }
        if let Some(collector) = self.0.downcast_ref::<ErrorCollector>() {
            return collector.serialize(serializer);
        }
        serializer.collect_str(self.0)
    }
}

enum Entry<'a> {
    Code(u32),
    Message(&'a str),
    Details(&'a DetailList),
    Cause(ErrorValue<'a>),
    Stack(&'a StackTrace),
    Context(&'a Value),
}

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Code(code) => serializer.serialize_u32(*code),
            Entry::Message(message) => serializer.serialize_str(message),
            Entry::Details(details) => details.serialize(serializer),
            Entry::Cause(cause) => cause.serialize(serializer),
            Entry::Stack(stack) => stack.serialize(serializer),
            Entry::Context(value) => value.serialize(serializer),
        }
    }
}

impl CompositeError {
    fn entries(&self, with_stack: bool) -> BTreeMap<&str, Entry<'_>> {
        let mut entries: BTreeMap<&str, Entry<'_>> =
            self.context.iter().map(|(key, value)| (key.as_str(), Entry::Context(value))).collect();

        if self.code != 0 {
            entries.insert(KEY_CODE, Entry::Code(self.code));
        }
        if !self.message.is_empty() {
            entries.insert(KEY_MESSAGE, Entry::Message(&self.message));
        }
        if !self.details.is_empty() {
            entries.insert(KEY_DETAILS, Entry::Details(&self.details));
        }
        if let Some(cause) = &self.cause {
            entries.insert(KEY_CAUSE, Entry::Cause(ErrorValue(&**cause)));
        }
        if with_stack && !self.stack.is_empty() {
            entries.insert(KEY_STACK, Entry::Stack(&self.stack));
        }

        entries
    }

    /// Returns a serializable view that also emits `error_stack`.
    pub fn encode_with_stack(&self) -> WithStack<'_> {
        WithStack(self)
    }

    pub fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encodes into a [`serde_json::Value`], useful for embedding in larger documents.
    pub fn to_value(&self) -> Result<Value, EncodeError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encodes as an `<Error>` document with PascalCase elements, e.g. `<ErrorCode>`.
    #[cfg(feature = "xml")]
    pub fn to_xml(&self) -> Result<String, EncodeError> {
        crate::types::xml::to_document("Error", &self.to_value()?)
    }
}

/// Keys are written in sorted order; the stack is left out.
impl Serialize for CompositeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries(false))
    }
}

/// Serializable view of a [`CompositeError`] that includes its stack trace.
pub struct WithStack<'a>(&'a CompositeError);

impl Serialize for WithStack<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.entries(true))
    }
}

/// Decoded form of an encoded error.
///
/// Keys other than the well-known ones are collected into `context`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, Deserialize)]
pub struct ErrorData {
    #[serde(rename = "error_code", default, skip_serializing_if = "is_zero")]
    pub code: u32,
    #[serde(rename = "error_message", default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(rename = "error_details", default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    #[serde(rename = "error_cause", default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Value>,
    #[serde(rename = "error_stack", default, skip_serializing_if = "Vec::is_empty")]
    pub stack: Vec<String>,
    #[serde(flatten)]
    pub context: Map,
}

fn is_zero(code: &u32) -> bool {
    *code == 0
}

/// Rebuilds an error from decoded data.
///
/// String causes become [`ErrorConstant`]s, arrays become an [`ErrorCollector`]
/// and objects are decoded recursively. Without an encoded stack, the stack is
/// captured at the conversion site.
impl From<ErrorData> for CompositeError {
    #[inline(never)]
    fn from(data: ErrorData) -> Self {
        let stack = if data.stack.is_empty() {
            StackTrace::capture()
        } else {
            data.stack.iter().map(|frame| StackFrame::parse_text(frame)).collect()
        };

        let mut error = CompositeError::assemble(data.message, None, stack);
        error.code = data.code;
        error.details.extend(data.details);
        error.context = without_reserved(data.context);
        error.cause = data.cause.and_then(decode_cause);
        error
    }
}

fn decode_cause(value: Value) -> Option<SharedError> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(Arc::new(ErrorConstant::new(text))),
        Value::Array(items) => {
            let collector: ErrorCollector = items.into_iter().filter_map(decode_cause).collect();
            Some(Arc::new(collector))
        },
        Value::Object(object) => {
            let fallback = Value::Object(object.clone()).to_string();
            match serde_json::from_value::<ErrorData>(Value::Object(object)) {
                Ok(data) => Some(Arc::new(CompositeError::from(data))),
                Err(_) => Some(Arc::new(ErrorConstant::new(fallback))),
            }
        },
        other => Some(Arc::new(ErrorConstant::new(other.to_string()))),
    }
}
