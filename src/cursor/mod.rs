//! # Row Cursor Capability
//!
//! A [`RowCursor`] is a forward-only, read-once sequence of rows produced by
//! executing a query. It exposes exactly the capability the decode layer
//! consumes: per-ordinal raw value access, a per-ordinal null check, row
//! advancement and disposal. Everything richer - typed extraction, nullable
//! handling, temporal and enum decoding - lives in [`crate::reader`].
//!
//! ## Raw Storage Representation
//!
//! [`RawValue`] mirrors the native storage kinds of the schema. Temporal
//! columns (both timestamps and durations) arrive as `I64` tick counts; the
//! semantic split happens at decode time, driven by the field's declared
//! kind. Text and blob values use `Cow` so a cursor backed by an in-flight
//! network buffer can hand out borrows while an owned-row cursor keeps its
//! own storage.
//!
//! ## Lifecycle
//!
//! ```text
//! created -> advance()* -> close()
//! ```
//!
//! A cursor starts positioned before the first row; `advance` returns
//! `false` once the rows are exhausted. Reading without a current row or
//! after `close` fails with a resource-misuse error. `close` is idempotent.

mod memory;


use std::borrow::Cow;

use eyre::Result;
use uuid::Uuid;

pub use memory::{MemoryCursor, RowBuilder};

/// A raw column value as stored by the underlying cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue<'a> {
    Null,
    Bool(bool),
    U8(u8),
    I8(i8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Guid(Uuid),
    Text(Cow<'a, str>),
    Blob(Cow<'a, [u8]>),
}

impl<'a> RawValue<'a> {
    /// Returns true if this cell holds SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Storage kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::U8(_) => "u8",
            RawValue::I8(_) => "i8",
            RawValue::I16(_) => "i16",
            RawValue::U16(_) => "u16",
            RawValue::I32(_) => "i32",
            RawValue::U32(_) => "u32",
            RawValue::I64(_) => "i64",
            RawValue::U64(_) => "u64",
            RawValue::F32(_) => "f32",
            RawValue::F64(_) => "f64",
            RawValue::Guid(_) => "guid",
            RawValue::Text(_) => "text",
            RawValue::Blob(_) => "blob",
        }
    }

    /// Reborrows this value without cloning owned text or blob storage.
    pub fn borrowed(&self) -> RawValue<'_> {
        match self {
            RawValue::Null => RawValue::Null,
            RawValue::Bool(v) => RawValue::Bool(*v),
            RawValue::U8(v) => RawValue::U8(*v),
            RawValue::I8(v) => RawValue::I8(*v),
            RawValue::I16(v) => RawValue::I16(*v),
            RawValue::U16(v) => RawValue::U16(*v),
            RawValue::I32(v) => RawValue::I32(*v),
            RawValue::U32(v) => RawValue::U32(*v),
            RawValue::I64(v) => RawValue::I64(*v),
            RawValue::U64(v) => RawValue::U64(*v),
            RawValue::F32(v) => RawValue::F32(*v),
            RawValue::F64(v) => RawValue::F64(*v),
            RawValue::Guid(v) => RawValue::Guid(*v),
            RawValue::Text(v) => RawValue::Text(Cow::Borrowed(v.as_ref())),
            RawValue::Blob(v) => RawValue::Blob(Cow::Borrowed(v.as_ref())),
        }
    }
}

/// Forward-only access to the rows of one in-flight query result.
///
/// Exactly one reader may hold disposal responsibility for a cursor at a
/// time; concurrent access from two readers or two threads is not defended
/// against here and must be prevented by the caller.
pub trait RowCursor {
    /// Number of columns in every row of this result.
    fn column_count(&self) -> usize;

    /// Whether the current row holds NULL at the given ordinal.
    fn is_null(&self, ordinal: usize) -> Result<bool>;

    /// Raw value of the current row at the given ordinal.
    fn value(&self, ordinal: usize) -> Result<RawValue<'_>>;

    /// Moves to the next row. Returns `false` once exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Releases the result. Idempotent; reads after close fail.
    fn close(&mut self) -> Result<()>;
}

impl<C: RowCursor + ?Sized> RowCursor for &mut C {
    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn is_null(&self, ordinal: usize) -> Result<bool> {
        (**self).is_null(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<RawValue<'_>> {
        (**self).value(ordinal)
    }

    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
