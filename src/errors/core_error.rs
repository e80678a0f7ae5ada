use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

use super::StoreError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoreErrorKind {
    NotFound,
    AlreadyExists,
    StorageUnavailable,
}

impl CoreErrorKind {
    /// Stable code exposed to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            CoreErrorKind::NotFound => "NOT_FOUND",
            CoreErrorKind::AlreadyExists => "ALREADY_EXISTS",
            CoreErrorKind::StorageUnavailable => "STORAGE_UNAVAILABLE",
        }
    }
}

#[derive(Debug)]
pub struct CoreError {
    kind: CoreErrorKind,
    message: String,
    fields: Option<BTreeMap<String, String>>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl CoreError {
    pub fn new(kind: CoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: None,
            source: None,
        }
    }

    /// `entity` could not be found by `field == value`.
    pub fn not_found(entity: &str, field: &str, value: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("entity".to_string(), entity.to_string());
        fields.insert(field.to_string(), value.into());

        Self::new(CoreErrorKind::NotFound, format!("{} not found", entity)).with_fields(fields)
    }

    pub fn already_exists(entity: &str, email: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("entity".to_string(), entity.to_string());
        fields.insert("email".to_string(), email.into());

        Self::new(
            CoreErrorKind::AlreadyExists,
            format!("{} already exists", entity),
        )
        .with_fields(fields)
    }

    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::new(CoreErrorKind::StorageUnavailable, message)
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> CoreErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> Option<&BTreeMap<String, String>> {
        self.fields.as_ref()
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl StdError for CoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::storage_unavailable(format!("Storage unavailable: {}", err)).with_source(err)
    }
}
