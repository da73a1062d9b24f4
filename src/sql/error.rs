//! Error and warning types for DDL generation

use thiserror::Error;

/// Errors that abort statement generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DdlError {
    /// A double quote inside an identifier cannot be escaped safely, so the
    /// whole table build is refused rather than risking a mangled name.
    #[error("unsafe identifier: {0:?}")]
    UnsafeIdentifier(String),
}

/// Result type for DDL generation.
pub type DdlResult<T> = Result<T, DdlError>;

/// Advisory findings collected while mapping fields. These never block
/// generation; they flag columns whose values should be produced locally
/// instead of synchronized verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    /// The source computes this field on read.
    CalculatedField(String),
    /// The metadata collaborator classifies this field as compound or
    /// aggregate.
    CompoundField(String),
}

impl std::fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaWarning::CalculatedField(name) => {
                write!(f, "Field {} should be calculated locally", name)
            }
            SchemaWarning::CompoundField(name) => {
                write!(f, "Field {} should be composed/aggregated locally", name)
            }
        }
    }
}
