/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Debug rendering for shapes.
//!
//! A shape renders as a single brace-delimited line listing only the fields
//! that are present, in declaration order, each as `WireName: value` — absent
//! fields are omitted entirely rather than shown as `None`. The [`shape!`]
//! macro emits a `Debug` impl built on [`ShapeFormatter`]; field values render
//! through [`FormatShapeField`].
//!
//! [`shape!`]: crate::shape!

use crate::{Blob, DateTime};
use std::fmt;

/// Writes one shape as `{Name: value, Name: value}`.
pub struct ShapeFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    has_fields: bool,
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    /// Starts rendering a shape into `f`.
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        ShapeFormatter {
            f,
            has_fields: false,
        }
    }

    /// Renders one present field.
    pub fn field(&mut self, name: &str, value: &dyn FormatShapeField) -> fmt::Result {
        if self.has_fields {
            self.f.write_str(", ")?;
        } else {
            self.f.write_str("{")?;
            self.has_fields = true;
        }
        write!(self.f, "{name}: ")?;
        value.fmt_field(self.f)
    }

    /// Closes the rendering. A shape with no present fields renders as `{}`.
    pub fn finish(self) -> fmt::Result {
        if !self.has_fields {
            self.f.write_str("{")?;
        }
        self.f.write_str("}")
    }
}

/// How a field value renders inside a shape's debug line.
///
/// Strings render raw (unquoted), scalars via `Display`, timestamps in
/// RFC 3339, blobs by length, lists bracketed, and nested shapes recursively
/// via their own shape rendering.
pub trait FormatShapeField {
    /// Writes this value into a shape rendering.
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl FormatShapeField for String {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FormatShapeField for i32 {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FormatShapeField for i64 {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FormatShapeField for bool {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FormatShapeField for DateTime {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FormatShapeField for Blob {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.as_ref().len())
    }
}

impl<T: FormatShapeField> FormatShapeField for Vec<T> {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_field(f)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod test {
    use super::ShapeFormatter;
    use std::fmt;

    struct TwoFields {
        a: Option<String>,
        b: Option<i32>,
    }

    impl fmt::Debug for TwoFields {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut fmt = ShapeFormatter::new(f);
            if let Some(v) = &self.a {
                fmt.field("A", v)?;
            }
            if let Some(v) = &self.b {
                fmt.field("B", v)?;
            }
            fmt.finish()
        }
    }

    #[test]
    fn renders_present_fields_only() {
        let shape = TwoFields {
            a: Some("alice".to_owned()),
            b: None,
        };
        assert_eq!(format!("{shape:?}"), "{A: alice}");
    }

    #[test]
    fn renders_all_fields_comma_separated() {
        let shape = TwoFields {
            a: Some("alice".to_owned()),
            b: Some(7),
        };
        assert_eq!(format!("{shape:?}"), "{A: alice, B: 7}");
    }

    #[test]
    fn renders_empty_shape() {
        let shape = TwoFields { a: None, b: None };
        assert_eq!(format!("{shape:?}"), "{}");
    }

    #[test]
    fn renders_lists_bracketed() {
        struct ListField {
            items: Option<Vec<String>>,
        }
        impl fmt::Debug for ListField {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut fmt = ShapeFormatter::new(f);
                if let Some(v) = &self.items {
                    fmt.field("Items", v)?;
                }
                fmt.finish()
            }
        }
        let shape = ListField {
            items: Some(vec!["a".to_owned(), "b".to_owned()]),
        };
        assert_eq!(format!("{shape:?}"), "{Items: [a, b]}");
    }
}
