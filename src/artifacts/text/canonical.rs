use serde::Serialize;
use std::borrow::Cow;

/// A value that can take part in a comparison.
///
/// Text is compared as is. Anything else is held as a JSON tree, which covers
/// null, booleans, numbers, strings, sequences and keyed mappings, and is
/// compared through its pretty-printed form.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparand<'a> {
    Text(Cow<'a, str>),
    Structured(serde_json::Value),
}

impl<'a> Comparand<'a> {
    /// Captures any serializable value as a structured comparand.
    ///
    /// Map keys keep their insertion order.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> crate::Result<Self> {
        Ok(Comparand::Structured(serde_json::to_value(value)?))
    }

    /// Canonical text of the value, two-space indented for structured values.
    pub fn canonicalize(&self) -> crate::Result<Cow<'_, str>> {
        match self {
            Comparand::Text(text) => Ok(Cow::Borrowed(text.as_ref())),
            Comparand::Structured(value) => Ok(Cow::Owned(serde_json::to_string_pretty(value)?)),
        }
    }
}

impl<'a> From<&'a str> for Comparand<'a> {
    fn from(text: &'a str) -> Self {
        Comparand::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Comparand<'a> {
    fn from(text: &'a String) -> Self {
        Comparand::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Comparand<'_> {
    fn from(text: String) -> Self {
        Comparand::Text(Cow::Owned(text))
    }
}

impl From<serde_json::Value> for Comparand<'_> {
    fn from(value: serde_json::Value) -> Self {
        Comparand::Structured(value)
    }
}
