//! # Declaration Macros
//!
//! This module provides the macros behind the concrete view bindings in
//! [`views`](crate::views). Every binding is data plus delegation: a struct
//! borrowing a [`ViewReader`](crate::reader::ViewReader), named accessors
//! that call the reader's ordinal getters, and a descriptor function that
//! builds the matching [`ViewDescriptor`](crate::descriptor::ViewDescriptor).
//!
//! ## db_enum!
//!
//! Declares a `#[repr(i32)]` enum stored by integral identity and implements
//! [`ViewEnum`](crate::reader::ViewEnum) for it.
//!
//! ### Usage
//!
//! ```ignore
//! db_enum! {
//!     DeviceCommandReplyStatus {
//!         Unknown = 0,
//!         Ok = 1,
//!         NotImplemented = 2,
//!         Error = 3,
//!     }
//! }
//! ```
//!
//! ## define_view!
//!
//! Declares a root view binding. Each field line gives the ordinal, the
//! accessor name, the column name, and a field spec token: a bare storage
//! token (`guid`, `i64`, `str`, `timestamp`, `duration`, ...) or a
//! parenthesized form - `(opt guid)` for nullable, `(enum Raim)` for typed
//! enums, `(opt enum Raim)` for both.
//!
//! ### Usage
//!
//! ```ignore
//! define_view! {
//!     AircraftTypeView ("AircraftTypeView", "at") {
//!         0 => id as "Id": guid,
//!         1 => row_version as "RowVersion": i64,
//!         2 => name as "Name": str,
//!     }
//! }
//!
//! // Generates:
//! // pub struct AircraftTypeView<'r, C: RowCursor> { reader: &'r ViewReader<C> }
//! // impl ... { pub fn id(&self) -> Result<Uuid> { self.reader().get_guid(0) } ... }
//! // pub fn aircraft_type_view_descriptor() -> Result<ViewDescriptor> { ... }
//! ```
//!
//! ## define_view_extension!
//!
//! Declares a derived view binding. The struct wraps the parent binding and
//! derefs to it, so every inherited accessor keeps its parent ordinal; the
//! added field lines must continue the parent's ordinal sequence. The
//! descriptor function extends the parent's descriptor, which pins the
//! shared prefix.

/// Declares an `i32`-coded enum and its [`ViewEnum`](crate::reader::ViewEnum)
/// impl. Codes map to variants by number; an undeclared code decodes to
/// `None`.
#[macro_export]
macro_rules! db_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $crate::reader::ViewEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn from_code(code: i32) -> ::core::option::Option<Self> {
                match code {
                    $( $code => ::core::option::Option::Some(Self::$variant), )+
                    _ => ::core::option::Option::None,
                }
            }

            fn code(self) -> i32 {
                self as i32
            }
        }
    };
}

/// Maps a bare field spec token to the accessor's native Rust type.
#[doc(hidden)]
#[macro_export]
macro_rules! view_field_ty {
    (bool) => { bool };
    (u8) => { u8 };
    (i8) => { i8 };
    (i16) => { i16 };
    (u16) => { u16 };
    (i32) => { i32 };
    (u32) => { u32 };
    (i64) => { i64 };
    (u64) => { u64 };
    (f32) => { f32 };
    (f64) => { f64 };
    (guid) => { ::uuid::Uuid };
    (str) => { ::std::borrow::Cow<'_, str> };
    (blob) => { ::std::borrow::Cow<'_, [u8]> };
    (timestamp) => { ::chrono::DateTime<::chrono::Utc> };
    (duration) => { ::chrono::TimeDelta };
}

/// Maps a bare field spec token to its [`FieldKind`](crate::descriptor::FieldKind).
#[doc(hidden)]
#[macro_export]
macro_rules! view_field_kind {
    (bool) => { $crate::descriptor::FieldKind::Bool };
    (u8) => { $crate::descriptor::FieldKind::U8 };
    (i8) => { $crate::descriptor::FieldKind::I8 };
    (i16) => { $crate::descriptor::FieldKind::I16 };
    (u16) => { $crate::descriptor::FieldKind::U16 };
    (i32) => { $crate::descriptor::FieldKind::I32 };
    (u32) => { $crate::descriptor::FieldKind::U32 };
    (i64) => { $crate::descriptor::FieldKind::I64 };
    (u64) => { $crate::descriptor::FieldKind::U64 };
    (f32) => { $crate::descriptor::FieldKind::F32 };
    (f64) => { $crate::descriptor::FieldKind::F64 };
    (guid) => { $crate::descriptor::FieldKind::Guid };
    (str) => { $crate::descriptor::FieldKind::Text };
    (blob) => { $crate::descriptor::FieldKind::Blob };
    (timestamp) => { $crate::descriptor::FieldKind::Timestamp };
    (duration) => { $crate::descriptor::FieldKind::Duration };
}

/// Builds the [`FieldDef`](crate::descriptor::FieldDef) for one field line.
#[doc(hidden)]
#[macro_export]
macro_rules! view_field {
    ($col:literal, (opt enum $t:ty)) => {
        $crate::descriptor::FieldDef::new($col, $crate::descriptor::FieldKind::Enum, true)
    };
    ($col:literal, (enum $t:ty)) => {
        $crate::descriptor::FieldDef::new($col, $crate::descriptor::FieldKind::Enum, false)
    };
    ($col:literal, (opt $tok:tt)) => {
        $crate::descriptor::FieldDef::new($col, $crate::view_field_kind!($tok), true)
    };
    ($col:literal, $tok:tt) => {
        $crate::descriptor::FieldDef::new($col, $crate::view_field_kind!($tok), false)
    };
}

/// Emits the named accessor for one field line, delegating to the reader's
/// ordinal getter for the spec token.
#[doc(hidden)]
#[macro_export]
macro_rules! view_accessor {
    ($method:ident, $ord:expr, (opt enum $t:ty)) => {
        pub fn $method(&self) -> ::eyre::Result<::core::option::Option<$t>> {
            self.reader().get_enum_opt::<$t>($ord)
        }
    };
    ($method:ident, $ord:expr, (enum $t:ty)) => {
        pub fn $method(&self) -> ::eyre::Result<$t> {
            self.reader().get_enum::<$t>($ord)
        }
    };
    ($method:ident, $ord:expr, (opt $tok:tt)) => {
        ::paste::paste! {
            pub fn $method(&self) -> ::eyre::Result<::core::option::Option<$crate::view_field_ty!($tok)>> {
                self.reader().[<get_ $tok _opt>]($ord)
            }
        }
    };
    ($method:ident, $ord:expr, $tok:tt) => {
        ::paste::paste! {
            pub fn $method(&self) -> ::eyre::Result<$crate::view_field_ty!($tok)> {
                self.reader().[<get_ $tok>]($ord)
            }
        }
    };
}

/// Declares a root view binding: struct, named accessors and descriptor
/// function. See the module docs for the field line grammar. The ordinal
/// list is checked at compile time to be contiguous from 0, so a skipped or
/// repeated ordinal is a build error, not a silently misbound accessor.
#[macro_export]
macro_rules! define_view {
    (
        $(#[$meta:meta])*
        $name:ident ($view_name:literal, $alias:literal) {
            $( $ord:literal => $method:ident as $col:literal : $spec:tt ),+ $(,)?
        }
    ) => {
        ::paste::paste! {
            const _: () = {
                let ordinals: &[usize] = &[$($ord),+];
                let mut idx = 0;
                while idx < ordinals.len() {
                    assert!(
                        ordinals[idx] == idx,
                        "view field ordinals must be contiguous from 0"
                    );
                    idx += 1;
                }
            };

            #[doc(hidden)]
            pub const [<$name:snake:upper _FIELD_COUNT>]: usize = [$($ord),+].len();

            $(#[$meta])*
            #[derive(Debug)]
            pub struct $name<'r, C: $crate::cursor::RowCursor> {
                reader: &'r $crate::reader::ViewReader<C>,
            }

            impl<'r, C: $crate::cursor::RowCursor> $name<'r, C> {
                /// Number of columns this view decodes.
                pub const FIELD_COUNT: usize = [<$name:snake:upper _FIELD_COUNT>];

                pub fn new(reader: &'r $crate::reader::ViewReader<C>) -> Self {
                    Self { reader }
                }

                pub fn reader(&self) -> &$crate::reader::ViewReader<C> {
                    self.reader
                }

                $( $crate::view_accessor!($method, $ord, $spec); )+
            }

            #[doc = "Decode table for `" $view_name "`."]
            pub fn [<$name:snake _descriptor>]() -> ::eyre::Result<$crate::descriptor::ViewDescriptor> {
                $crate::descriptor::ViewDescriptor::new(
                    $view_name,
                    $alias,
                    vec![ $( $crate::view_field!($col, $spec) ),+ ],
                )
            }
        }
    };
}

/// Declares a derived view binding on top of an existing one. The new struct
/// wraps the parent and derefs to it; added field lines continue the
/// parent's ordinal sequence and the descriptor extends the parent's. The
/// added ordinals are checked at compile time to start at the parent's field
/// count and run contiguously from there.
#[macro_export]
macro_rules! define_view_extension {
    (
        $(#[$meta:meta])*
        $name:ident ($view_name:literal, $alias:literal) : $parent:ident {
            $( $ord:literal => $method:ident as $col:literal : $spec:tt ),+ $(,)?
        }
    ) => {
        ::paste::paste! {
            const _: () = {
                let ordinals: &[usize] = &[$($ord),+];
                assert!(
                    ordinals[0] == [<$parent:snake:upper _FIELD_COUNT>],
                    "derived view fields must start at the parent's field count"
                );
                let mut idx = 0;
                while idx < ordinals.len() {
                    assert!(
                        ordinals[idx] == ordinals[0] + idx,
                        "view field ordinals must be contiguous"
                    );
                    idx += 1;
                }
            };

            #[doc(hidden)]
            pub const [<$name:snake:upper _FIELD_COUNT>]: usize =
                [<$parent:snake:upper _FIELD_COUNT>] + [$($ord),+].len();

            $(#[$meta])*
            #[derive(Debug)]
            pub struct $name<'r, C: $crate::cursor::RowCursor> {
                base: $parent<'r, C>,
            }

            impl<'r, C: $crate::cursor::RowCursor> $name<'r, C> {
                /// Number of columns this view decodes, inherited included.
                pub const FIELD_COUNT: usize = [<$name:snake:upper _FIELD_COUNT>];

                pub fn new(reader: &'r $crate::reader::ViewReader<C>) -> Self {
                    Self { base: $parent::new(reader) }
                }

                $( $crate::view_accessor!($method, $ord, $spec); )+
            }

            impl<'r, C: $crate::cursor::RowCursor> ::core::ops::Deref for $name<'r, C> {
                type Target = $parent<'r, C>;

                fn deref(&self) -> &Self::Target {
                    &self.base
                }
            }

            #[doc = "Decode table for `" $view_name "`, extending `" $parent "`."]
            pub fn [<$name:snake _descriptor>]() -> ::eyre::Result<$crate::descriptor::ViewDescriptor> {
                [<$parent:snake _descriptor>]()?.extend(
                    $view_name,
                    $alias,
                    vec![ $( $crate::view_field!($col, $spec) ),+ ],
                )
            }
        }
    };
}
