//! # ViewReader - Typed Ordinal Decoding
//!
//! `ViewReader` wraps exactly one [`RowCursor`] and decodes the cursor's
//! current row into semantically typed values by ordinal. It is the single
//! decoder behind every concrete view binding: the per-view layer only adds
//! names and descriptor tables on top of these getters.
//!
//! ## Usage
//!
//! ```ignore
//! let mut reader = ViewReader::new(cursor);
//! while reader.advance()? {
//!     let id = reader.get_guid(0)?;
//!     let reply: Option<Uuid> = reader.get_guid_opt(6)?;
//! }
//! ```
//!
//! ## Contract
//!
//! Non-nullable getters treat a NULL cell as a contract violation and fail
//! with [`DecodeError::NullViolation`] - the schema declared the column
//! non-nullable, so a default would mask generation drift. The `_opt`
//! variants return `None` exactly when the cursor reports NULL. A request
//! whose type does not match the column's native storage fails with a type
//! mismatch; an ordinal past the column count fails out-of-range. None of
//! these are recoverable locally and all propagate unretried.
//!
//! ## Ownership
//!
//! The reader holds the cursor by value. Constructed with `new` it owns the
//! cursor and closes it when dropped, on every exit path. Constructed with
//! `with_ownership(cursor, false)` - typically over `&mut cursor` - disposal
//! stays with the caller and drop touches nothing.


use std::borrow::Cow;

use chrono::{DateTime, TimeDelta, Utc};
use eyre::Result;
use uuid::Uuid;

use crate::cursor::{RawValue, RowCursor};
use crate::descriptor::{FieldKind, ViewDescriptor};
use crate::error::DecodeError;
use crate::temporal;

/// An enum stored by integral identity in a view column.
///
/// Implemented via [`db_enum!`](crate::db_enum); codes map to variants by
/// number, never by name, and a code with no declared variant is reported as
/// schema drift.
pub trait ViewEnum: Sized + Copy {
    /// Enum name for diagnostics.
    const NAME: &'static str;

    /// Maps a stored code to its declared variant, if any.
    fn from_code(code: i32) -> Option<Self>;

    /// The integral identity of this variant.
    fn code(self) -> i32;
}

/// A semantically decoded cell, as produced by [`ViewReader::decode_row`].
///
/// Enum fields carry their raw code here; typed enum access goes through
/// [`ViewReader::get_enum`] or a concrete view binding.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
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
    Timestamp(DateTime<Utc>),
    Duration(TimeDelta),
    Enum(i32),
}

/// Decode view over exactly one row cursor.
#[derive(Debug)]
pub struct ViewReader<C: RowCursor> {
    cursor: C,
    owns_cursor: bool,
}

impl<C: RowCursor> ViewReader<C> {
    /// Wraps a cursor, taking disposal responsibility for it.
    pub fn new(cursor: C) -> Self {
        Self::with_ownership(cursor, true)
    }

    /// Wraps a cursor with explicit disposal responsibility. With
    /// `owns_cursor` false the caller keeps disposal; pass `&mut cursor` to
    /// keep using it afterwards.
    pub fn with_ownership(cursor: C, owns_cursor: bool) -> Self {
        Self { cursor, owns_cursor }
    }

    pub fn owns_cursor(&self) -> bool {
        self.owns_cursor
    }

    pub fn column_count(&self) -> usize {
        self.cursor.column_count()
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Moves the underlying cursor to its next row. The reader keeps no
    /// per-row state, so one instance decodes successive rows.
    pub fn advance(&mut self) -> Result<bool> {
        self.cursor.advance()
    }

    /// Closes the underlying cursor now, regardless of ownership. Drop does
    /// this automatically for an owning reader.
    pub fn close(&mut self) -> Result<()> {
        self.cursor.close()
    }

    /// Whether the current row holds NULL at the given ordinal.
    pub fn is_null(&self, ordinal: usize) -> Result<bool> {
        self.cursor.is_null(ordinal)
    }

    fn non_null(&self, ordinal: usize) -> Result<RawValue<'_>> {
        let value = self.cursor.value(ordinal)?;
        if value.is_null() {
            return Err(DecodeError::NullViolation { ordinal }.into());
        }
        Ok(value)
    }

    fn mismatch(ordinal: usize, requested: &'static str, stored: &RawValue<'_>) -> eyre::Report {
        DecodeError::TypeMismatch {
            ordinal,
            requested,
            stored: stored.kind_name(),
        }
        .into()
    }

    pub fn get_bool(&self, ordinal: usize) -> Result<bool> {
        match self.non_null(ordinal)? {
            RawValue::Bool(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "bool", &other)),
        }
    }

    pub fn get_u8(&self, ordinal: usize) -> Result<u8> {
        match self.non_null(ordinal)? {
            RawValue::U8(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "u8", &other)),
        }
    }

    pub fn get_i8(&self, ordinal: usize) -> Result<i8> {
        match self.non_null(ordinal)? {
            RawValue::I8(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "i8", &other)),
        }
    }

    pub fn get_i16(&self, ordinal: usize) -> Result<i16> {
        match self.non_null(ordinal)? {
            RawValue::I16(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "i16", &other)),
        }
    }

    pub fn get_u16(&self, ordinal: usize) -> Result<u16> {
        match self.non_null(ordinal)? {
            RawValue::U16(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "u16", &other)),
        }
    }

    pub fn get_i32(&self, ordinal: usize) -> Result<i32> {
        match self.non_null(ordinal)? {
            RawValue::I32(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "i32", &other)),
        }
    }

    pub fn get_u32(&self, ordinal: usize) -> Result<u32> {
        match self.non_null(ordinal)? {
            RawValue::U32(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "u32", &other)),
        }
    }

    pub fn get_i64(&self, ordinal: usize) -> Result<i64> {
        match self.non_null(ordinal)? {
            RawValue::I64(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "i64", &other)),
        }
    }

    pub fn get_u64(&self, ordinal: usize) -> Result<u64> {
        match self.non_null(ordinal)? {
            RawValue::U64(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "u64", &other)),
        }
    }

    pub fn get_f32(&self, ordinal: usize) -> Result<f32> {
        match self.non_null(ordinal)? {
            RawValue::F32(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "f32", &other)),
        }
    }

    pub fn get_f64(&self, ordinal: usize) -> Result<f64> {
        match self.non_null(ordinal)? {
            RawValue::F64(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "f64", &other)),
        }
    }

    pub fn get_guid(&self, ordinal: usize) -> Result<Uuid> {
        match self.non_null(ordinal)? {
            RawValue::Guid(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "guid", &other)),
        }
    }

    /// Passes the cursor's raw text through unchanged.
    pub fn get_str(&self, ordinal: usize) -> Result<Cow<'_, str>> {
        match self.non_null(ordinal)? {
            RawValue::Text(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "text", &other)),
        }
    }

    /// Passes the cursor's raw bytes through unchanged.
    pub fn get_blob(&self, ordinal: usize) -> Result<Cow<'_, [u8]>> {
        match self.non_null(ordinal)? {
            RawValue::Blob(v) => Ok(v),
            other => Err(Self::mismatch(ordinal, "blob", &other)),
        }
    }

    /// Decodes an i64 tick count as an absolute UTC instant.
    pub fn get_timestamp(&self, ordinal: usize) -> Result<DateTime<Utc>> {
        match self.non_null(ordinal)? {
            RawValue::I64(ticks) => temporal::timestamp_from_ticks(ticks),
            other => Err(Self::mismatch(ordinal, "timestamp ticks (i64)", &other)),
        }
    }

    /// Decodes an i64 tick count as an elapsed span. Same storage as
    /// [`get_timestamp`](Self::get_timestamp); the field's declared role
    /// picks the getter.
    pub fn get_duration(&self, ordinal: usize) -> Result<TimeDelta> {
        match self.non_null(ordinal)? {
            RawValue::I64(ticks) => temporal::duration_from_ticks(ticks),
            other => Err(Self::mismatch(ordinal, "duration ticks (i64)", &other)),
        }
    }

    /// Raw integral code of an enum column.
    pub fn get_enum_code(&self, ordinal: usize) -> Result<i32> {
        match self.non_null(ordinal)? {
            RawValue::I32(code) => Ok(code),
            other => Err(Self::mismatch(ordinal, "enum code (i32)", &other)),
        }
    }

    /// Decodes an enum column by numeric identity. A code with no declared
    /// variant fails - it means the schema and this build disagree.
    pub fn get_enum<T: ViewEnum>(&self, ordinal: usize) -> Result<T> {
        let code = self.get_enum_code(ordinal)?;
        T::from_code(code).ok_or_else(|| {
            DecodeError::UnknownEnumCode {
                ordinal,
                enum_name: T::NAME,
                code,
            }
            .into()
        })
    }

    pub fn get_bool_opt(&self, ordinal: usize) -> Result<Option<bool>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_bool(ordinal).map(Some)
    }

    pub fn get_u8_opt(&self, ordinal: usize) -> Result<Option<u8>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_u8(ordinal).map(Some)
    }

    pub fn get_i8_opt(&self, ordinal: usize) -> Result<Option<i8>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_i8(ordinal).map(Some)
    }

    pub fn get_i16_opt(&self, ordinal: usize) -> Result<Option<i16>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_i16(ordinal).map(Some)
    }

    pub fn get_u16_opt(&self, ordinal: usize) -> Result<Option<u16>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_u16(ordinal).map(Some)
    }

    pub fn get_i32_opt(&self, ordinal: usize) -> Result<Option<i32>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_i32(ordinal).map(Some)
    }

    pub fn get_u32_opt(&self, ordinal: usize) -> Result<Option<u32>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_u32(ordinal).map(Some)
    }

    pub fn get_i64_opt(&self, ordinal: usize) -> Result<Option<i64>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_i64(ordinal).map(Some)
    }

    pub fn get_u64_opt(&self, ordinal: usize) -> Result<Option<u64>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_u64(ordinal).map(Some)
    }

    pub fn get_f32_opt(&self, ordinal: usize) -> Result<Option<f32>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_f32(ordinal).map(Some)
    }

    pub fn get_f64_opt(&self, ordinal: usize) -> Result<Option<f64>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_f64(ordinal).map(Some)
    }

    pub fn get_guid_opt(&self, ordinal: usize) -> Result<Option<Uuid>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_guid(ordinal).map(Some)
    }

    pub fn get_str_opt(&self, ordinal: usize) -> Result<Option<Cow<'_, str>>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_str(ordinal).map(Some)
    }

    pub fn get_blob_opt(&self, ordinal: usize) -> Result<Option<Cow<'_, [u8]>>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_blob(ordinal).map(Some)
    }

    pub fn get_timestamp_opt(&self, ordinal: usize) -> Result<Option<DateTime<Utc>>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_timestamp(ordinal).map(Some)
    }

    pub fn get_duration_opt(&self, ordinal: usize) -> Result<Option<TimeDelta>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_duration(ordinal).map(Some)
    }

    pub fn get_enum_opt<T: ViewEnum>(&self, ordinal: usize) -> Result<Option<T>> {
        if self.cursor.is_null(ordinal)? {
            return Ok(None);
        }
        self.get_enum::<T>(ordinal).map(Some)
    }

    /// Decodes the current row field-by-field through a descriptor.
    ///
    /// Nullable fields decode NULL to [`FieldValue::Null`]; a NULL in a
    /// non-nullable field is a [`DecodeError::NullViolation`].
    pub fn decode_row(&self, descriptor: &ViewDescriptor) -> Result<Vec<FieldValue<'_>>> {
        let mut values = Vec::with_capacity(descriptor.field_count());
        for (ordinal, field) in descriptor.fields().iter().enumerate() {
            if field.nullable && self.cursor.is_null(ordinal)? {
                values.push(FieldValue::Null);
                continue;
            }
            let value = match field.kind {
                FieldKind::Bool => FieldValue::Bool(self.get_bool(ordinal)?),
                FieldKind::U8 => FieldValue::U8(self.get_u8(ordinal)?),
                FieldKind::I8 => FieldValue::I8(self.get_i8(ordinal)?),
                FieldKind::I16 => FieldValue::I16(self.get_i16(ordinal)?),
                FieldKind::U16 => FieldValue::U16(self.get_u16(ordinal)?),
                FieldKind::I32 => FieldValue::I32(self.get_i32(ordinal)?),
                FieldKind::U32 => FieldValue::U32(self.get_u32(ordinal)?),
                FieldKind::I64 => FieldValue::I64(self.get_i64(ordinal)?),
                FieldKind::U64 => FieldValue::U64(self.get_u64(ordinal)?),
                FieldKind::F32 => FieldValue::F32(self.get_f32(ordinal)?),
                FieldKind::F64 => FieldValue::F64(self.get_f64(ordinal)?),
                FieldKind::Guid => FieldValue::Guid(self.get_guid(ordinal)?),
                FieldKind::Text => FieldValue::Text(self.get_str(ordinal)?),
                FieldKind::Blob => FieldValue::Blob(self.get_blob(ordinal)?),
                FieldKind::Timestamp => FieldValue::Timestamp(self.get_timestamp(ordinal)?),
                FieldKind::Duration => FieldValue::Duration(self.get_duration(ordinal)?),
                FieldKind::Enum => FieldValue::Enum(self.get_enum_code(ordinal)?),
            };
            values.push(value);
        }
        Ok(values)
    }
}

impl<C: RowCursor> Drop for ViewReader<C> {
    fn drop(&mut self) {
        if self.owns_cursor {
            let _ = self.cursor.close();
        }
    }
}
