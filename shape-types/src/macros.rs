/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shape declaration macros.
//!
//! A service model describes each shape as a named table of optional, typed
//! fields. [`shape!`] expands one such table into everything a shape needs to
//! behave as a value: the struct, its getters, a builder with
//! fluent/`set_`/`get_` accessors, and a `Debug` impl that renders present
//! fields only. Because a single declaration drives all of it, the accessors,
//! equality, hashing, and rendering cannot drift apart when fields are added.
//!
//! Field kinds and their storage:
//!
//! | kind | stored | getter |
//! |---|---|---|
//! | `string` | `Option<String>` | `Option<&str>` |
//! | `integer` | `Option<i32>` | `Option<i32>` |
//! | `long` | `Option<i64>` | `Option<i64>` |
//! | `boolean` | `Option<bool>` | `Option<bool>` |
//! | `timestamp` | `Option<DateTime>` | `Option<&DateTime>` |
//! | `blob` | `Option<Blob>` | `Option<&Blob>` |
//! | `structure(T)` | `Option<T>` | `Option<&T>` |
//! | `list(T)` | `Option<Vec<T>>` | `Option<&[T]>` |
//!
//! String setters take `impl Into<String>`, which is where typed enum
//! constants flow in; getters hand back the raw string unconditionally so an
//! unrecognized value from a newer service version never breaks a caller.
//! List fields get two construction forms: the fluent form appends one
//! element at a time, the `set_` form replaces the whole collection verbatim
//! (`None` clears to absent, an empty vector stays present-but-empty).

/// Declares one shape: struct, getters, builder, and debug rendering.
///
/// ```
/// use shape_types::shape;
///
/// shape! {
///     /// A label attached to a resource.
///     pub struct Tag => TagBuilder {
///         /// The key name of the tag.
///         key["Key"]: string,
///         /// The value of the tag.
///         value["Value"]: string,
///     }
/// }
///
/// let tag = Tag::builder().key("Dept").value("accounting").build();
/// assert_eq!(tag.key(), Some("Dept"));
/// assert_eq!(format!("{tag:?}"), "{Key: Dept, Value: accounting}");
/// ```
#[macro_export]
macro_rules! shape {
    (
        $(#[$smeta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident[$wire:literal]: $kind:ident $(($kty:ty))?
            ),* $(,)?
        }
    ) => {
        $(#[$smeta])*
        #[non_exhaustive]
        #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::cmp::Eq, ::std::hash::Hash)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $crate::shape!(@stored $kind $(($kty))?),
            )*
        }

        impl $name {
            $(
                $crate::shape!(@getter $(#[$fmeta])* $field $kind $(($kty))?);
            )*

            #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($name), "`].")]
            pub fn builder() -> $builder {
                <$builder as ::std::default::Default>::default()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut fmt = $crate::shape_fmt::ShapeFormatter::new(f);
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        fmt.field($wire, value)?;
                    }
                )*
                fmt.finish()
            }
        }

        impl $crate::shape_fmt::FormatShapeField for $name {
            fn fmt_field(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(self, f)
            }
        }

        #[doc = concat!("A builder for [`", stringify!($name), "`].")]
        #[non_exhaustive]
        #[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
        pub struct $builder {
            $(
                pub(crate) $field: $crate::shape!(@stored $kind $(($kty))?),
            )*
        }

        impl $builder {
            $(
                $crate::shape!(@builder_methods $(#[$fmeta])* $field [$wire] $kind $(($kty))?);
            )*

            #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`].")]
            pub fn build(self) -> $name {
                $name {
                    $(
                        $field: self.$field,
                    )*
                }
            }
        }
    };

    // Stored field types.
    (@stored string) => { ::std::option::Option<::std::string::String> };
    (@stored integer) => { ::std::option::Option<i32> };
    (@stored long) => { ::std::option::Option<i64> };
    (@stored boolean) => { ::std::option::Option<bool> };
    (@stored timestamp) => { ::std::option::Option<$crate::DateTime> };
    (@stored blob) => { ::std::option::Option<$crate::Blob> };
    (@stored structure($t:ty)) => { ::std::option::Option<$t> };
    (@stored list($t:ty)) => { ::std::option::Option<::std::vec::Vec<$t>> };

    // Getters on the shape itself.
    (@getter $(#[$m:meta])* $f:ident string) => {
        $(#[$m])*
        pub fn $f(&self) -> ::std::option::Option<&str> {
            self.$f.as_deref()
        }
    };
    (@getter $(#[$m:meta])* $f:ident integer) => {
        $(#[$m])*
        pub fn $f(&self) -> ::std::option::Option<i32> {
            self.$f
        }
    };
    (@getter $(#[$m:meta])* $f:ident long) => {
        $(#[$m])*
        pub fn $f(&self) -> ::std::option::Option<i64> {
            self.$f
        }
    };
    (@getter $(#[$m:meta])* $f:ident boolean) => {
        $(#[$m])*
        pub fn $f(&self) -> ::std::option::Option<bool> {
            self.$f
        }
    };
    (@getter $(#[$m:meta])* $f:ident timestamp) => {
        $(#[$m])*
        pub fn $f(&self) -> ::std::option::Option<&$crate::DateTime> {
            self.$f.as_ref()
        }
    };
    (@getter $(#[$m:meta])* $f:ident blob) => {
        $(#[$m])*
        pub fn $f(&self) -> ::std::option::Option<&$crate::Blob> {
            self.$f.as_ref()
        }
    };
    (@getter $(#[$m:meta])* $f:ident structure($t:ty)) => {
        $(#[$m])*
        pub fn $f(&self) -> ::std::option::Option<&$t> {
            self.$f.as_ref()
        }
    };
    (@getter $(#[$m:meta])* $f:ident list($t:ty)) => {
        $(#[$m])*
        pub fn $f(&self) -> ::std::option::Option<&[$t]> {
            self.$f.as_deref()
        }
    };

    // Builder accessors. Strings accept `impl Into<String>` so enum constants
    // can be passed directly; lists append one element per fluent call.
    (@builder_methods $(#[$m:meta])* $f:ident [$wire:literal] string) => {
        $(#[$m])*
        pub fn $f(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
            self.$f = ::std::option::Option::Some(input.into());
            self
        }
        $crate::shape!(@set_get $f [$wire] ::std::string::String);
    };
    (@builder_methods $(#[$m:meta])* $f:ident [$wire:literal] integer) => {
        $(#[$m])*
        pub fn $f(mut self, input: i32) -> Self {
            self.$f = ::std::option::Option::Some(input);
            self
        }
        $crate::shape!(@set_get $f [$wire] i32);
    };
    (@builder_methods $(#[$m:meta])* $f:ident [$wire:literal] long) => {
        $(#[$m])*
        pub fn $f(mut self, input: i64) -> Self {
            self.$f = ::std::option::Option::Some(input);
            self
        }
        $crate::shape!(@set_get $f [$wire] i64);
    };
    (@builder_methods $(#[$m:meta])* $f:ident [$wire:literal] boolean) => {
        $(#[$m])*
        pub fn $f(mut self, input: bool) -> Self {
            self.$f = ::std::option::Option::Some(input);
            self
        }
        $crate::shape!(@set_get $f [$wire] bool);
    };
    (@builder_methods $(#[$m:meta])* $f:ident [$wire:literal] timestamp) => {
        $(#[$m])*
        pub fn $f(mut self, input: $crate::DateTime) -> Self {
            self.$f = ::std::option::Option::Some(input);
            self
        }
        $crate::shape!(@set_get $f [$wire] $crate::DateTime);
    };
    (@builder_methods $(#[$m:meta])* $f:ident [$wire:literal] blob) => {
        $(#[$m])*
        pub fn $f(mut self, input: $crate::Blob) -> Self {
            self.$f = ::std::option::Option::Some(input);
            self
        }
        $crate::shape!(@set_get $f [$wire] $crate::Blob);
    };
    (@builder_methods $(#[$m:meta])* $f:ident [$wire:literal] structure($t:ty)) => {
        $(#[$m])*
        pub fn $f(mut self, input: $t) -> Self {
            self.$f = ::std::option::Option::Some(input);
            self
        }
        $crate::shape!(@set_get $f [$wire] $t);
    };
    (@builder_methods $(#[$m:meta])* $f:ident [$wire:literal] list($t:ty)) => {
        $(#[$m])*
        #[doc = ""]
        #[doc = concat!("Appends one item to `", $wire, "`; earlier items are kept. To replace or clear the whole collection use the `set_` form.")]
        pub fn $f(mut self, input: impl ::std::convert::Into<$t>) -> Self {
            let mut items = self.$f.take().unwrap_or_default();
            items.push(input.into());
            self.$f = ::std::option::Option::Some(items);
            self
        }
        $crate::__paste! {
            #[doc = concat!("Replaces `", $wire, "` with the given collection verbatim: `None` clears the field, an empty vector stays present-but-empty.")]
            pub fn [<set_ $f>](mut self, input: ::std::option::Option<::std::vec::Vec<$t>>) -> Self {
                self.$f = input;
                self
            }
            #[doc = concat!("Returns the current value of `", $wire, "`.")]
            pub fn [<get_ $f>](&self) -> &::std::option::Option<::std::vec::Vec<$t>> {
                &self.$f
            }
        }
    };
    (@set_get $f:ident [$wire:literal] $t:ty) => {
        $crate::__paste! {
            #[doc = concat!("Sets `", $wire, "` to the given value, or clears it when `None`.")]
            pub fn [<set_ $f>](mut self, input: ::std::option::Option<$t>) -> Self {
                self.$f = input;
                self
            }
            #[doc = concat!("Returns the current value of `", $wire, "`.")]
            pub fn [<get_ $f>](&self) -> &::std::option::Option<$t> {
                &self.$f
            }
        }
    };
}

/// Declares a closed set of known wire values for a string-typed field.
///
/// The enum is a convenience for writers only: shape fields constrained to an
/// enum are stored and read as plain strings, and the typed constant enters
/// through the setter's `impl Into<String>` position. Parsing an unknown value
/// reports [`UnknownVariantError`](crate::UnknownVariantError) instead of
/// failing hard, so newer service values stay representable as strings.
///
/// ```
/// use shape_types::string_enum;
///
/// string_enum! {
///     /// Whether the key is active.
///     pub enum StatusType {
///         Active => "Active",
///         Inactive => "Inactive",
///     }
/// }
///
/// assert_eq!(StatusType::Active.as_str(), "Active");
/// assert_eq!("Inactive".parse::<StatusType>(), Ok(StatusType::Inactive));
/// assert!("Deleted".parse::<StatusType>().is_err());
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$emeta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$emeta])*
        #[non_exhaustive]
        #[derive(
            ::std::clone::Clone,
            ::std::marker::Copy,
            ::std::fmt::Debug,
            ::std::cmp::Eq,
            ::std::hash::Hash,
            ::std::cmp::Ord,
            ::std::cmp::PartialEq,
            ::std::cmp::PartialOrd,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// The wire value of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Every wire value this model knows.
            pub const fn values() -> &'static [&'static str] {
                &[$($value),+]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownVariantError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($value => ::std::result::Result::Ok(Self::$variant),)+
                    other => ::std::result::Result::Err($crate::UnknownVariantError::new(other)),
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use crate::DateTime;

    shape! {
        /// A shape exercising every accessor form.
        pub struct TestShape => TestShapeBuilder {
            /// A plain string field.
            name["Name"]: string,
            /// A page-size style integer.
            max_items["MaxItems"]: integer,
            /// A truncation flag.
            is_truncated["IsTruncated"]: boolean,
            /// A creation instant.
            create_date["CreateDate"]: timestamp,
            /// A string list.
            labels["Labels"]: list(::std::string::String),
        }
    }

    string_enum! {
        /// Test status values.
        pub enum TestStatus {
            Active => "Active",
            Inactive => "Inactive",
        }
    }

    #[test]
    fn roundtrip_through_builder() {
        let shape = TestShape::builder()
            .name("alice")
            .max_items(100)
            .is_truncated(true)
            .create_date(DateTime::from_epoch_seconds(1576540098))
            .build();
        assert_eq!(shape.name(), Some("alice"));
        assert_eq!(shape.max_items(), Some(100));
        assert_eq!(shape.is_truncated(), Some(true));
        assert_eq!(
            shape.create_date(),
            Some(&DateTime::from_epoch_seconds(1576540098))
        );
        assert_eq!(shape.labels(), None);
    }

    #[test]
    fn set_forms_replace_verbatim() {
        let builder = TestShape::builder().name("before").set_name(None);
        assert_eq!(builder.get_name(), &None);
        let shape = builder.set_labels(Some(vec![])).build();
        assert_eq!(shape.labels(), Some(&[][..]));
    }

    #[test]
    fn list_append_and_bulk_forms_converge() {
        let appended = TestShape::builder().labels("a").labels("b").build();
        let bulk = TestShape::builder()
            .set_labels(Some(vec!["a".to_owned(), "b".to_owned()]))
            .build();
        assert_eq!(appended, bulk);
    }

    #[test]
    fn debug_renders_present_fields_in_declaration_order() {
        let shape = TestShape::builder().name("alice").max_items(3).build();
        assert_eq!(format!("{shape:?}"), "{Name: alice, MaxItems: 3}");
        let empty = TestShape::builder().build();
        assert_eq!(format!("{empty:?}"), "{}");
    }

    #[test]
    fn enum_constants_flow_through_string_setters() {
        let typed = TestShape::builder().name(TestStatus::Active).build();
        let raw = TestShape::builder().name("Active").build();
        assert_eq!(typed, raw);
        assert_eq!(typed.name(), Some("Active"));
    }

    #[test]
    fn equal_shapes_hash_equal() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let a = TestShape::builder().name("alice").labels("x").build();
        let b = TestShape::builder().name("alice").labels("x").build();
        assert_eq!(a, b);
        let hash = |shape: &TestShape| {
            let mut hasher = DefaultHasher::new();
            shape.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }
}
