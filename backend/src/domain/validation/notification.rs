use serde::Serialize;
use std::fmt;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Collects validation failures without stopping at the first one.
///
/// Errors keep their insertion order, which is the order callers report them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Appends every error of `other`, keeping its order.
    pub fn merge(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

impl FromIterator<ValidationError> for Notification {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}
