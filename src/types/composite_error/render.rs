use super::CompositeError;
use crate::types::error_formatter::{Render, Sheet, Style};
use crate::types::ErrorCollector;
use core::fmt;

/// Single field of a [`CompositeError`] that can be rendered on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Code,
    Message,
    /// The underlying error.
    Cause,
    Details,
    Stack,
}

impl CompositeError {
    /// Renders a single field. Unset fields render as an empty string.
    pub fn field(&self, field: Field, style: Style) -> String {
        match field {
            Field::Code if self.code == 0 => String::new(),
            Field::Code => self.code.to_string(),
            Field::Message => match style {
                Style::Raw => format!("{:?}", self.message),
                _ => self.message.clone(),
            },
            Field::Cause => match (&self.cause, style) {
                (None, _) => String::new(),
                (Some(cause), Style::Compact) => cause.to_string(),
                (Some(cause), Style::Verbose) => format!("{:#}", cause),
                (Some(cause), Style::Raw) => format!("{:?}", cause),
            },
            Field::Details => self.details.render(style),
            Field::Stack => self.stack.render(style),
        }
    }

    /// Single-line form: `code: 404 message: failed details: [a] cause: oh no`.
    pub fn to_compact(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);

        if self.code != 0 {
            parts.push(format!("code: {}", self.code));
        }
        if !self.message.is_empty() {
            parts.push(format!("message: {}", self.message));
        }
        if !self.details.is_empty() {
            parts.push(format!("details: {}", self.details.render(Style::Compact)));
        }
        if let Some(cause) = &self.cause {
            parts.push(format!("cause: {}", cause));
        }

        parts.join(" ")
    }

    /// Multi-line form with right-aligned labels, including the stack trace.
    pub fn to_verbose(&self) -> String {
        let mut sheet = Sheet::new();

        if self.code != 0 {
            sheet.cell("code:", self.code.to_string());
        }
        if !self.message.is_empty() {
            sheet.cell("message:", self.message.clone());
        }
        if !self.details.is_empty() {
            sheet.cell("details:", "");
            sheet.text(self.details.render(Style::Verbose));
        }
        if let Some(cause) = &self.cause {
            match cause.downcast_ref::<ErrorCollector>() {
                Some(collector) if !collector.is_empty() => {
                    sheet.cell("cause:", "");
                    sheet.text(collector.render(Style::Verbose));
                },
                _ => sheet.cell("cause:", cause.to_string()),
            }
        }
        if !self.stack.is_empty() {
            sheet.cell("stack:", "");
            sheet.text(self.stack.render(Style::Verbose));
        }

        sheet.finish()
    }
}

impl Render for CompositeError {
    fn render(&self, style: Style) -> String {
        match style {
            Style::Compact => self.to_compact(),
            Style::Verbose => self.to_verbose(),
            Style::Raw => format!("{:?}", self),
        }
    }
}

/// `{}` prints the compact form, `{:#}` the verbose form with the stack trace.
impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.to_verbose())
        } else {
            f.write_str(&self.to_compact())
        }
    }
}

impl fmt::Debug for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeError")
            .field("code", &self.code)
            .field("status", &self.status)
            .field("message", &self.message)
            .field("details", &self.details)
            .field("context", &self.context)
            .field("stack", &self.stack)
            .field("cause", &self.cause)
            .finish()
    }
}
