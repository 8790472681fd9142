use std::string::FromUtf8Error;

/// Failure while encoding an error into JSON or XML.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "xml")]
    #[error("xml encoding failed: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("encoded output is not valid utf-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}
