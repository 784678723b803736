//! # View Schema Descriptors
//!
//! A [`ViewDescriptor`] is the ordered (ordinal -> semantic field) table for
//! one concrete SQL view, plus the three constants a query-composition layer
//! consumes: the rendered base query text, the source view name and the
//! alias used inside that query. Descriptors are generation-time data; the
//! field list's length and order MUST match the column list the source query
//! produces. Nothing at decode time re-checks that contract - a reordered
//! SELECT list is a silent-corruption bug, which is why composition is the
//! only way to build a derived descriptor.
//!
//! ## Ordinal Inheritance by Composition
//!
//! The source schema expresses view inheritance positionally: if view `V`
//! extends base view `B` with `N` columns, `V`'s query selects `B`'s `N`
//! columns first, in the same order, then `V`'s own fields at ordinals
//! `N..N+M-1`. [`ViewDescriptor::extend`] builds the child by appending to a
//! copy of the parent's field table, so ordinal stability holds by
//! construction, and [`ViewDescriptor::extends`] re-checks it structurally
//! where a caller wants the one-time verification.

#[cfg(test)]
mod tests;

use eyre::{bail, ensure, Result};

use crate::error::DecodeError;

/// Semantic type of one view field.
///
/// `Timestamp`, `Duration` and `Enum` share integral storage with the plain
/// integer kinds; the declared kind, never the stored value, decides how a
/// cell decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    U8,
    I8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Guid,
    Text,
    Blob,
    Timestamp,
    Duration,
    Enum,
}

impl FieldKind {
    /// Name of the raw storage kind this semantic kind decodes from.
    pub fn storage(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::U8 => "u8",
            FieldKind::I8 => "i8",
            FieldKind::I16 => "i16",
            FieldKind::U16 => "u16",
            FieldKind::I32 | FieldKind::Enum => "i32",
            FieldKind::I64 | FieldKind::Timestamp | FieldKind::Duration => "i64",
            FieldKind::U32 => "u32",
            FieldKind::U64 => "u64",
            FieldKind::F32 => "f32",
            FieldKind::F64 => "f64",
            FieldKind::Guid => "guid",
            FieldKind::Text => "text",
            FieldKind::Blob => "blob",
        }
    }
}

/// One (name, semantic kind, nullability) entry of a view's field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    pub nullable: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind, nullable: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable,
        }
    }

    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self::new(name, kind, false)
    }

    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self::new(name, kind, true)
    }
}

/// Static per-view decode table: ordered fields, view name, alias and the
/// rendered base query. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    view_name: String,
    alias: String,
    fields: Vec<FieldDef>,
    base_query: String,
    inherited_count: usize,
}

impl ViewDescriptor {
    /// Builds a root descriptor. Fails on an empty field list or a duplicate
    /// field name - both are generation bugs.
    pub fn new(
        view_name: impl Into<String>,
        alias: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> Result<Self> {
        Self::with_inherited(view_name.into(), alias.into(), fields, 0)
    }

    fn with_inherited(
        view_name: String,
        alias: String,
        fields: Vec<FieldDef>,
        inherited_count: usize,
    ) -> Result<Self> {
        ensure!(
            !fields.is_empty(),
            "view '{}' must declare at least one field",
            view_name
        );
        ensure!(
            !view_name.is_empty() && !alias.is_empty(),
            "view name and alias must be non-empty"
        );
        for (idx, field) in fields.iter().enumerate() {
            if fields[..idx].iter().any(|f| f.name == field.name) {
                bail!(
                    "view '{}' declares field '{}' more than once",
                    view_name,
                    field.name
                );
            }
        }

        let base_query = render_base_query(&view_name, &alias, &fields);
        Ok(Self {
            view_name,
            alias,
            fields,
            base_query,
            inherited_count,
        })
    }

    /// Builds a derived descriptor: this descriptor's fields keep ordinals
    /// `0..N-1` unchanged and `added` continues at ordinal `N`.
    pub fn extend(
        &self,
        view_name: impl Into<String>,
        alias: impl Into<String>,
        added: Vec<FieldDef>,
    ) -> Result<ViewDescriptor> {
        ensure!(
            !added.is_empty(),
            "derived view must add at least one field to '{}'",
            self.view_name
        );
        let mut fields = self.fields.clone();
        fields.extend(added);
        Self::with_inherited(view_name.into(), alias.into(), fields, self.fields.len())
    }

    /// Structural check that `self` reuses `parent`'s ordinals unchanged:
    /// every parent field must appear at the same ordinal with the same
    /// name, kind and nullability.
    pub fn extends(&self, parent: &ViewDescriptor) -> Result<()> {
        for (ordinal, parent_field) in parent.fields.iter().enumerate() {
            let matches = self
                .fields
                .get(ordinal)
                .is_some_and(|field| field == parent_field);
            if !matches {
                return Err(DecodeError::OrdinalDrift {
                    child: self.view_name.clone(),
                    parent: parent.view_name.clone(),
                    ordinal,
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The rendered `SELECT ... FROM [View] alias` text for this view.
    pub fn base_query(&self) -> &str {
        &self.base_query
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of leading ordinals inherited from a parent view. Zero for a
    /// root descriptor.
    pub fn inherited_count(&self) -> usize {
        self.inherited_count
    }

    pub fn field(&self, ordinal: usize) -> Option<&FieldDef> {
        self.fields.get(ordinal)
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Ordinal of the named field. Stable for the descriptor's lifetime.
    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

fn render_base_query(view_name: &str, alias: &str, fields: &[FieldDef]) -> String {
    let mut query = String::from("SELECT \r\n");
    for (idx, field) in fields.iter().enumerate() {
        let terminator = if idx + 1 == fields.len() { " \r\n" } else { ", \r\n" };
        query.push_str(&format!("  {}.[{}]{}", alias, field.name, terminator));
    }
    query.push_str(&format!("FROM [{}] {} \r\n", view_name, alias));
    query
}
