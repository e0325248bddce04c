use thiserror::Error;

use crate::model::EntityKind;

/// Result type alias using MixtapeError
pub type Result<T> = std::result::Result<T, MixtapeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log fields, test
/// assertions and the CLI's diagnostic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Store integrity
    InvalidIdentifier,
    DuplicateIdentifier,
    NotFound,

    // Change payloads
    MissingValue,
    InvalidValue,
    SchemaInvalid,
    UnrecognizedChange,

    // Integration/IO
    Transport,
    Decode,
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidIdentifier => "ERR_INVALID_IDENTIFIER",
            ExErrorKind::DuplicateIdentifier => "ERR_DUPLICATE_IDENTIFIER",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::MissingValue => "ERR_MISSING_VALUE",
            ExErrorKind::InvalidValue => "ERR_INVALID_VALUE",
            ExErrorKind::SchemaInvalid => "ERR_SCHEMA_INVALID",
            ExErrorKind::UnrecognizedChange => "ERR_UNRECOGNIZED_CHANGE",
            ExErrorKind::Transport => "ERR_TRANSPORT",
            ExErrorKind::Decode => "ERR_DECODE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation
/// and entity context of the failure.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for store, change and ingestion operations
///
/// Store operations are strict and return the first failing check. The
/// change interpreter turns any of these into a skipped change; the pipeline
/// treats them as fatal during bulk ingestion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixtapeError {
    // ===== Store Integrity =====
    /// Identifier is not an unsigned 32-bit decimal integer
    #[error("{} ID {id} is invalid", .entity.title())]
    InvalidIdentifier { entity: EntityKind, id: String },

    /// Identifier already present in its collection
    #[error("Duplicate {entity} ID {id}")]
    DuplicateIdentifier { entity: EntityKind, id: String },

    /// Referenced entity does not exist
    #[error("{}", not_found_message(.entity, .id))]
    NotFound { entity: EntityKind, id: String },

    // ===== Change Payload Errors =====
    /// Change carries no value where one is required
    #[error("Missing {what} value")]
    MissingValue { what: &'static str },

    /// Change value has the wrong shape
    #[error("Invalid {what} value: {reason}")]
    InvalidValue { what: &'static str, reason: String },

    /// Playlist payload failed structural validation
    #[error("Invalid playlist value: {reason}")]
    SchemaInvalid { reason: String },

    /// Operation verb or path matches no known change shape
    #[error("Unrecognized change: op '{op}' on path '{path}'")]
    UnrecognizedChange { op: String, path: String },

    // ===== Integration Errors =====
    /// Fetching a collection failed (connect, status, read timeout)
    #[error("Transport failure for {resource}: {message}")]
    Transport { resource: String, message: String },

    /// Collection body is not valid JSON of the expected record shape
    #[error("Decode failure in {resource}: {message}")]
    Decode { resource: String, message: String },

    /// Local file or thread I/O failed
    #[error("I/O error during {operation}: {message}")]
    Io { operation: String, message: String },

    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl MixtapeError {
    /// The canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            MixtapeError::InvalidIdentifier { .. } => ExErrorKind::InvalidIdentifier,
            MixtapeError::DuplicateIdentifier { .. } => ExErrorKind::DuplicateIdentifier,
            MixtapeError::NotFound { .. } => ExErrorKind::NotFound,
            MixtapeError::MissingValue { .. } => ExErrorKind::MissingValue,
            MixtapeError::InvalidValue { .. } => ExErrorKind::InvalidValue,
            MixtapeError::SchemaInvalid { .. } => ExErrorKind::SchemaInvalid,
            MixtapeError::UnrecognizedChange { .. } => ExErrorKind::UnrecognizedChange,
            MixtapeError::Transport { .. } => ExErrorKind::Transport,
            MixtapeError::Decode { .. } => ExErrorKind::Decode,
            MixtapeError::Io { .. } => ExErrorKind::Io,
            MixtapeError::Serialization { .. } => ExErrorKind::Serialization,
            MixtapeError::Internal { .. } => ExErrorKind::Internal,
        }
    }

    /// Whether this error aborts a run even while applying changes
    ///
    /// Transport, decode and local I/O failures stop the pipeline wherever
    /// they occur. Everything else is only fatal during bulk ingestion.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MixtapeError::Transport { .. }
                | MixtapeError::Decode { .. }
                | MixtapeError::Io { .. }
                | MixtapeError::Serialization { .. }
                | MixtapeError::Internal { .. }
        )
    }
}

/// A missing playlist is the subject of the failed operation; a missing
/// user or song is a reference from one
fn not_found_message(entity: &EntityKind, id: &str) -> String {
    match entity {
        EntityKind::Playlist => format!("Playlist ID {} does not exist", id),
        EntityKind::User | EntityKind::Song => format!("The {} ID {} does not exist", entity, id),
    }
}

/// Conversion from MixtapeError to ExError
impl From<MixtapeError> for ExError {
    fn from(err: MixtapeError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let base = ExError::new(kind).with_message(message);
        match err {
            MixtapeError::InvalidIdentifier { id, .. }
            | MixtapeError::DuplicateIdentifier { id, .. }
            | MixtapeError::NotFound { id, .. } => base.with_entity_id(id),
            MixtapeError::UnrecognizedChange { op, .. } => base.with_op(op),
            MixtapeError::Transport { resource, .. } | MixtapeError::Decode { resource, .. } => {
                base.with_op("fetch").with_entity_id(resource)
            }
            MixtapeError::Io { operation, .. } => base.with_op(operation),
            MixtapeError::MissingValue { .. }
            | MixtapeError::InvalidValue { .. }
            | MixtapeError::SchemaInvalid { .. }
            | MixtapeError::Serialization { .. }
            | MixtapeError::Internal { .. } => base,
        }
    }
}

impl From<serde_json::Error> for MixtapeError {
    fn from(err: serde_json::Error) -> Self {
        MixtapeError::Serialization {
            message: err.to_string(),
        }
    }
}
