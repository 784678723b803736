//! # In-Memory Row Cursor
//!
//! `MemoryCursor` materializes a query result as owned rows and replays them
//! through the [`RowCursor`] capability. It backs the crate's test fixtures
//! and any caller that already holds decoded raw rows (cache replay, fixture
//! ingestion). `RowBuilder` assembles one row ordinal-by-ordinal with the
//! same set-by-position idiom the decode layer reads with.

use std::borrow::Cow;

use eyre::{ensure, Result};
use uuid::Uuid;

use super::{RawValue, RowCursor};
use crate::error::DecodeError;

/// Owned-row implementation of [`RowCursor`].
#[derive(Debug, Default)]
pub struct MemoryCursor {
    column_count: usize,
    rows: Vec<Vec<RawValue<'static>>>,
    current: Option<usize>,
    next: usize,
    closed: bool,
    close_calls: u32,
}

impl MemoryCursor {
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            rows: Vec::new(),
            current: None,
            next: 0,
            closed: false,
            close_calls: 0,
        }
    }

    /// Appends one row. The row width must match the cursor's column count.
    pub fn push_row(&mut self, row: Vec<RawValue<'static>>) -> Result<()> {
        ensure!(
            row.len() == self.column_count,
            "row width {} does not match cursor column count {}",
            row.len(),
            self.column_count
        );
        self.rows.push(row);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of times the cursor transitioned into the closed state.
    pub fn close_calls(&self) -> u32 {
        self.close_calls
    }

    fn current_row(&self) -> Result<&[RawValue<'static>]> {
        if self.closed {
            return Err(DecodeError::CursorClosed.into());
        }
        let idx = self.current.ok_or(DecodeError::NoCurrentRow)?;
        Ok(&self.rows[idx])
    }

    fn cell(&self, ordinal: usize) -> Result<&RawValue<'static>> {
        let row = self.current_row()?;
        row.get(ordinal).ok_or_else(|| {
            DecodeError::OrdinalOutOfRange {
                ordinal,
                column_count: self.column_count,
            }
            .into()
        })
    }
}

impl RowCursor for MemoryCursor {
    fn column_count(&self) -> usize {
        self.column_count
    }

    fn is_null(&self, ordinal: usize) -> Result<bool> {
        Ok(self.cell(ordinal)?.is_null())
    }

    fn value(&self, ordinal: usize) -> Result<RawValue<'_>> {
        Ok(self.cell(ordinal)?.borrowed())
    }

    fn advance(&mut self) -> Result<bool> {
        if self.closed {
            return Err(DecodeError::CursorClosed.into());
        }
        if self.next < self.rows.len() {
            self.current = Some(self.next);
            self.next += 1;
            Ok(true)
        } else {
            self.current = None;
            Ok(false)
        }
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            self.current = None;
            self.close_calls += 1;
        }
        Ok(())
    }
}

/// Assembles one row for a [`MemoryCursor`], ordinal by ordinal.
///
/// Every cell starts as NULL; setters overwrite by position.
#[derive(Debug)]
pub struct RowBuilder {
    cells: Vec<RawValue<'static>>,
}

impl RowBuilder {
    pub fn new(column_count: usize) -> Self {
        Self {
            cells: vec![RawValue::Null; column_count],
        }
    }

    fn set(&mut self, ordinal: usize, value: RawValue<'static>) -> Result<()> {
        ensure!(
            ordinal < self.cells.len(),
            "ordinal {} out of range for row with {} columns",
            ordinal,
            self.cells.len()
        );
        self.cells[ordinal] = value;
        Ok(())
    }

    pub fn set_null(&mut self, ordinal: usize) -> Result<()> {
        self.set(ordinal, RawValue::Null)
    }

    pub fn set_bool(&mut self, ordinal: usize, value: bool) -> Result<()> {
        self.set(ordinal, RawValue::Bool(value))
    }

    pub fn set_u8(&mut self, ordinal: usize, value: u8) -> Result<()> {
        self.set(ordinal, RawValue::U8(value))
    }

    pub fn set_i8(&mut self, ordinal: usize, value: i8) -> Result<()> {
        self.set(ordinal, RawValue::I8(value))
    }

    pub fn set_i16(&mut self, ordinal: usize, value: i16) -> Result<()> {
        self.set(ordinal, RawValue::I16(value))
    }

    pub fn set_u16(&mut self, ordinal: usize, value: u16) -> Result<()> {
        self.set(ordinal, RawValue::U16(value))
    }

    pub fn set_i32(&mut self, ordinal: usize, value: i32) -> Result<()> {
        self.set(ordinal, RawValue::I32(value))
    }

    pub fn set_u32(&mut self, ordinal: usize, value: u32) -> Result<()> {
        self.set(ordinal, RawValue::U32(value))
    }

    pub fn set_i64(&mut self, ordinal: usize, value: i64) -> Result<()> {
        self.set(ordinal, RawValue::I64(value))
    }

    pub fn set_u64(&mut self, ordinal: usize, value: u64) -> Result<()> {
        self.set(ordinal, RawValue::U64(value))
    }

    pub fn set_f32(&mut self, ordinal: usize, value: f32) -> Result<()> {
        self.set(ordinal, RawValue::F32(value))
    }

    pub fn set_f64(&mut self, ordinal: usize, value: f64) -> Result<()> {
        self.set(ordinal, RawValue::F64(value))
    }

    pub fn set_guid(&mut self, ordinal: usize, value: Uuid) -> Result<()> {
        self.set(ordinal, RawValue::Guid(value))
    }

    pub fn set_text(&mut self, ordinal: usize, value: impl Into<String>) -> Result<()> {
        self.set(ordinal, RawValue::Text(Cow::Owned(value.into())))
    }

    pub fn set_blob(&mut self, ordinal: usize, value: impl Into<Vec<u8>>) -> Result<()> {
        self.set(ordinal, RawValue::Blob(Cow::Owned(value.into())))
    }

    /// Stores a tick count; timestamps and durations share this storage.
    pub fn set_ticks(&mut self, ordinal: usize, ticks: i64) -> Result<()> {
        self.set(ordinal, RawValue::I64(ticks))
    }

    pub fn finish(self) -> Vec<RawValue<'static>> {
        self.cells
    }
}
