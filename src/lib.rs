//! # SeaView - Typed Decoding of Maritime SQL View Rows
//!
//! SeaView decodes forward-only SQL result cursors into strongly-typed values
//! for a large polymorphic maritime schema (sensor, device, track, zone and
//! timeseries views). The schema exposes hundreds of SQL views that all share
//! one decode contract:
//!
//! - **Ordinal-indexed access**: every field is read by its zero-based column
//!   position, fixed at generation time, never discovered at runtime
//! - **Nullable-safe extraction**: non-nullable getters fail loudly on NULL
//!   instead of substituting defaults
//! - **Enum decoding by integral identity**: codes map to enum values by
//!   number, not by name
//! - **Tick-encoded temporals**: signed 64-bit counts of 100 ns units decode
//!   to UTC instants or elapsed spans depending on the field's declared role
//! - **Ordinal inheritance**: a derived view selects its parent's columns
//!   first and appends its own, so inherited accessors stay valid unchanged
//!
//! Instead of one generated class per view, SeaView implements the pattern
//! once and represents each view as data:
//!
//! ```text
//! +--------------------------------------------------+
//! |  views (declarative bindings: define_view!)      |
//! +--------------------------------------------------+
//! |  registry (view name -> descriptor, read-only)   |
//! +--------------------------------------------------+
//! |  descriptor (ordinal -> field table, composable) |
//! +--------------------------------------------------+
//! |  reader (ViewReader: typed ordinal getters)      |
//! +--------------------------------------------------+
//! |  cursor (RowCursor capability, external rows)    |
//! +--------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use seaview::reader::ViewReader;
//! use seaview::views::AisDeviceCommandView;
//!
//! let mut reader = ViewReader::new(cursor);
//! while reader.advance()? {
//!     let row = AisDeviceCommandView::new(&reader);
//!     let device = row.ais_device()?;
//!     let issued_at = row.timestamp()?;
//! }
//! ```
//!
//! ## Scope
//!
//! SeaView is a decode layer only: no query building, no write path, no
//! change tracking, no caching. Decode failures are schema or generation
//! bugs, not environmental conditions; every error propagates to the caller
//! and nothing is retried.
//!
//! ## Module Overview
//!
//! - [`cursor`]: the `RowCursor` capability and an in-memory implementation
//! - [`reader`]: `ViewReader`, the generic ordinal-indexed decoder
//! - [`descriptor`]: per-view field tables with structural composition
//! - [`registry`]: process-wide read-only map of view descriptors
//! - [`views`]: concrete maritime view bindings and their enums
//! - [`temporal`]: 100 ns tick conversions for instants and spans

mod macros;

pub mod cursor;
pub mod descriptor;
pub mod error;
pub mod reader;
pub mod registry;
pub mod temporal;
pub mod views;

pub use cursor::{MemoryCursor, RawValue, RowBuilder, RowCursor};
pub use descriptor::{FieldDef, FieldKind, ViewDescriptor};
pub use error::DecodeError;
pub use reader::{FieldValue, ViewEnum, ViewReader};
pub use registry::ViewRegistry;
