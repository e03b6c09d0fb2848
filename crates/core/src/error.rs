use std::fmt;

use crate::types::DbId;

/// The catalog an identity belongs to. Carried by [`CoreError::NotFound`]
/// so callers always learn which kind of reference was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Film,
    Genre,
    Mpa,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Person => "person",
            EntityKind::Film => "film",
            EntityKind::Genre => "genre",
            EntityKind::Mpa => "MPA rating",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced identity does not exist in its catalog.
    #[error("Entity not found: {kind} with id {id}")]
    NotFound { kind: EntityKind, id: DbId },

    /// A friendship edge insert targeted a pair that already has an edge.
    #[error("People {a} and {b} are already friends")]
    AlreadyExists { a: DbId, b: DbId },

    /// A structurally invalid request to the core itself.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A field-shape check failed at the edge.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A storage backend failure. The message is traced by the backend and
    /// sanitized at the HTTP boundary.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(kind: EntityKind, id: DbId) -> Self {
        CoreError::NotFound { kind, id }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
