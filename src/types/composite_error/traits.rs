use super::CompositeError;
use core::error::Error as StdError;
use std::borrow::Cow;

impl StdError for CompositeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }
}

impl From<&str> for CompositeError {
    #[inline(never)]
    fn from(message: &str) -> Self {
        CompositeError::new(message)
    }
}

impl From<String> for CompositeError {
    #[inline(never)]
    fn from(message: String) -> Self {
        CompositeError::new(message)
    }
}

impl From<Cow<'_, str>> for CompositeError {
    #[inline(never)]
    fn from(message: Cow<'_, str>) -> Self {
        CompositeError::new(message)
    }
}
