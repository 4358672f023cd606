//! Response envelope shared by every remote operation

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single error reported by the remote platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub message: String,
    /// Request field the error refers to, when the platform names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), field: None }
    }

    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { message: message.into(), field: Some(field.into()) }
    }
}

/// Errors carried by a response. Displays as the combined message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCollection(Vec<ErrorEntry>);

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ErrorEntry) {
        self.0.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.0.iter()
    }
}

impl From<Vec<ErrorEntry>> for ErrorCollection {
    fn from(entries: Vec<ErrorEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<ErrorEntry> for ErrorCollection {
    fn from_iter<I: IntoIterator<Item = ErrorEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            match &entry.field {
                Some(field) => write!(f, "{}: {}", field, entry.message)?,
                None => f.write_str(&entry.message)?,
            }
        }
        Ok(())
    }
}

/// Outcome of a remote call that produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub errors: ErrorCollection,
    /// Decoded payload; present only when the platform returned one
    pub resource: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: u16, errors: ErrorCollection, resource: Option<T>) -> Self {
        Self { status_code, errors, resource }
    }

    /// Response with a payload and no errors.
    pub fn with_resource(status_code: u16, resource: T) -> Self {
        Self::new(status_code, ErrorCollection::new(), Some(resource))
    }

    /// Response without payload and without errors.
    pub fn empty(status_code: u16) -> Self {
        Self::new(status_code, ErrorCollection::new(), None)
    }

    /// Response carrying remote errors.
    pub fn with_errors(status_code: u16, errors: impl Into<ErrorCollection>) -> Self {
        Self::new(status_code, errors.into(), None)
    }

    /// Convert the resource, keeping status and errors.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status_code: self.status_code,
            errors: self.errors,
            resource: self.resource.map(f),
        }
    }
}
