//! # Decode Error Taxonomy
//!
//! Every failure in this crate is a schema or usage bug, never a transient
//! condition, so errors carry enough context to locate the drift and nothing
//! is retried. Three classes exist:
//!
//! | Class | Variants | Meaning |
//! |-------|----------|---------|
//! | **SchemaMismatch** | `OrdinalOutOfRange`, `TypeMismatch`, `UnknownEnumCode`, `OrdinalDrift` | generated ordinals no longer match the live query |
//! | **NullViolation** | `NullViolation` | a column declared non-nullable held NULL |
//! | **ResourceMisuse** | `CursorClosed`, `NoCurrentRow` | the cursor was used outside its valid lifecycle |
//!
//! Errors propagate wrapped in [`eyre::Report`]; callers that need to branch
//! on the class can `downcast_ref::<DecodeError>()`.

use thiserror::Error;

/// Typed decode failure. See the module docs for the class taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("ordinal {ordinal} out of range for cursor with {column_count} columns")]
    OrdinalOutOfRange { ordinal: usize, column_count: usize },

    #[error("type mismatch at ordinal {ordinal}: requested {requested}, column stores {stored}")]
    TypeMismatch {
        ordinal: usize,
        requested: &'static str,
        stored: &'static str,
    },

    #[error("unrecognized code {code} for enum {enum_name} at ordinal {ordinal}")]
    UnknownEnumCode {
        ordinal: usize,
        enum_name: &'static str,
        code: i32,
    },

    #[error("view '{child}' does not extend '{parent}' at ordinal {ordinal}")]
    OrdinalDrift {
        child: String,
        parent: String,
        ordinal: usize,
    },

    #[error("null value at non-nullable ordinal {ordinal}")]
    NullViolation { ordinal: usize },

    #[error("cursor used after close")]
    CursorClosed,

    #[error("cursor has no current row")]
    NoCurrentRow,
}

impl DecodeError {
    /// Returns true for the variants that indicate generation/schema drift.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(
            self,
            DecodeError::OrdinalOutOfRange { .. }
                | DecodeError::TypeMismatch { .. }
                | DecodeError::UnknownEnumCode { .. }
                | DecodeError::OrdinalDrift { .. }
        )
    }

    /// Returns true for the variants that indicate cursor lifecycle misuse.
    pub fn is_resource_misuse(&self) -> bool {
        matches!(self, DecodeError::CursorClosed | DecodeError::NoCurrentRow)
    }
}
