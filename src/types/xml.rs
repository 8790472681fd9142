//! XML rendering of encoded errors.
//!
//! Objects become nested elements whose names are the PascalCase form of their
//! keys (`error_code` -> `ErrorCode`), arrays become repeated `<Item>` children
//! and scalars become escaped text.

use crate::types::EncodeError;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;
use std::io::Cursor;

type XmlWriter = Writer<Cursor<Vec<u8>>>;

pub(crate) fn to_document(root: &str, value: &Value) -> Result<String, EncodeError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_element(&mut writer, root, value)?;
    finish(writer)
}

pub(crate) fn to_list_document(root: &str, item: &str, values: &[Value]) -> Result<String, EncodeError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Start(BytesStart::new(root)))?;
    for value in values {
        write_element(&mut writer, item, value)?;
    }
    writer.write_event(Event::End(BytesEnd::new(root)))?;
    finish(writer)
}

fn finish(writer: XmlWriter) -> Result<String, EncodeError> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn write_element(writer: &mut XmlWriter, name: &str, value: &Value) -> Result<(), EncodeError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;

    match value {
        Value::Null => {},
        Value::Object(entries) => {
            for (key, child) in entries {
                write_element(writer, &pascal(key), child)?;
            }
        },
        Value::Array(items) => {
            for child in items {
                write_element(writer, "Item", child)?;
            }
        },
        Value::String(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        },
        scalar => {
            writer.write_event(Event::Text(BytesText::new(&scalar.to_string())))?;
        },
    }

    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// `error_code` -> `ErrorCode`. Characters not valid in an element name are dropped,
/// and a name that would start with a digit or be empty gets a leading `_`.
fn pascal(key: &str) -> String {
    let mut name = String::with_capacity(key.len());

    for part in key.split(|c: char| c == '_' || c == '-' || c == ' ') {
        let mut chars = part.chars().filter(|c| c.is_alphanumeric() || *c == '.');
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.extend(chars);
        }
    }

    match name.chars().next() {
        Some(first) if !first.is_ascii_digit() && first != '.' => name,
        _ => format!("_{}", name),
    }
}
