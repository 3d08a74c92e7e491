use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Names a product in the per-event store.
///
/// Written as `label` or `label:instance`. An empty instance selects the
/// product registered under the bare label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputTag {
    label: String,
    instance: String,
}

/// Errors that can occur when parsing an [`InputTag`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputTagError {
    #[error("label must not be empty")]
    EmptyLabel,

    #[error("expected `label` or `label:instance`, found {fields} fields")]
    TooManyFields { fields: usize },

    #[error("label and instance must not contain whitespace")]
    Whitespace,
}

impl InputTag {
    /// Creates an input tag from a label and instance name.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or either part contains
    /// whitespace or a colon.
    pub fn new(label: &str, instance: &str) -> Result<Self, InputTagError> {
        if label.is_empty() {
            return Err(InputTagError::EmptyLabel);
        }
        if label.contains(':') || instance.contains(':') {
            let fields = label.split(':').count() + instance.split(':').count();
            return Err(InputTagError::TooManyFields { fields });
        }
        if label.contains(char::is_whitespace) || instance.contains(char::is_whitespace) {
            return Err(InputTagError::Whitespace);
        }

        Ok(Self {
            label: label.to_owned(),
            instance: instance.to_owned(),
        })
    }

    /// Returns the module label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the product instance name, empty if unset.
    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }
}

impl FromStr for InputTag {
    type Err = InputTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(':').collect();
        match fields.as_slice() {
            [label] => Self::new(label, ""),
            [label, instance] => Self::new(label, instance),
            _ => Err(InputTagError::TooManyFields {
                fields: fields.len(),
            }),
        }
    }
}

impl fmt::Display for InputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}:{}", self.label, self.instance)
        }
    }
}

impl Serialize for InputTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InputTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_only() {
        let tag: InputTag = "goodMuons".parse().unwrap();

        assert_eq!(tag.label(), "goodMuons");
        assert_eq!(tag.instance(), "");
        assert_eq!(tag.to_string(), "goodMuons");
    }

    #[test]
    fn parses_label_and_instance() {
        let tag: InputTag = " muons:tight ".parse().unwrap();

        assert_eq!(tag.label(), "muons");
        assert_eq!(tag.instance(), "tight");
        assert_eq!(tag.to_string(), "muons:tight");
    }

    #[test]
    fn rejects_malformed_tags() {
        assert_eq!("".parse::<InputTag>(), Err(InputTagError::EmptyLabel));
        assert_eq!(":tight".parse::<InputTag>(), Err(InputTagError::EmptyLabel));
        assert_eq!(
            "a:b:c".parse::<InputTag>(),
            Err(InputTagError::TooManyFields { fields: 3 })
        );
        assert_eq!(
            "good muons".parse::<InputTag>(),
            Err(InputTagError::Whitespace)
        );
    }
}
