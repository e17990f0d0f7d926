//! Declarative per-type schemas: the ordered field lists that drive the
//! mapper.
//!
//! Instead of runtime reflection, every serializable type declares an
//! explicit, ordered list of fields through [`XmlSchema::fields`]. The
//! declaration is the opt-in: a field left out of the list never appears in
//! the output, which is also how non-serializable state (derived values,
//! internal handles) is excluded.

use std::fmt;

use chrono::{DateTime, Utc};

/// A type that can be mapped to an XML element tree.
pub trait XmlSchema {
    /// The type's name, used as the root element tag and as the item tag for
    /// sequences.
    fn type_name(&self) -> &str;

    /// The fields to serialize, in output order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// A primitive, numeric, boolean, or string value with no nested structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Boolean, rendered as lowercase `true`/`false`.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// String value, rendered verbatim.
    Text(String),
}

impl Scalar {
    /// Render to text form.
    ///
    /// The conversion is locale-independent: booleans render `true`/`false`,
    /// floats use Rust's shortest round-trip formatting.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Scalar::Bool(v) => String::from(if *v { "true" } else { "false" }),
            Scalar::Int(v) => v.to_string(),
            Scalar::UInt(v) => v.to_string(),
            Scalar::Float(v) => v.to_string(),
            Scalar::Text(v) => v.clone(),
        }
    }
}

macro_rules! impl_scalar_from {
    ($variant:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value.into())
                }
            }
        )+
    };
}

impl_scalar_from!(Bool: bool);
impl_scalar_from!(Int: i8, i16, i32, i64);
impl_scalar_from!(UInt: u8, u16, u32, u64);
impl_scalar_from!(Float: f32, f64);
impl_scalar_from!(Text: &str, String);

/// One field's value, classified by kind.
pub enum Value<'a> {
    /// A scalar rendered as text content or an attribute value.
    Scalar(Scalar),
    /// A timestamp, rendered per the call's date format policy.
    DateTime(DateTime<Utc>),
    /// An ordered sequence of nested values.
    Sequence(Vec<&'a dyn XmlSchema>),
    /// A nested object, mapped recursively.
    Complex(&'a dyn XmlSchema),
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            Value::DateTime(ts) => f.debug_tuple("DateTime").field(ts).finish(),
            Value::Sequence(items) => f
                .debug_tuple("Sequence")
                .field(&format_args!("{} items", items.len()))
                .finish(),
            Value::Complex(nested) => f
                .debug_tuple("Complex")
                .field(&nested.type_name())
                .finish(),
        }
    }
}

/// Per-field configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldOptions {
    /// Replacement for the declared name. `None` or an empty string keeps the
    /// declared name.
    pub rename: Option<&'static str>,
    /// Emit the value as an attribute on the parent element instead of a
    /// child element. Only valid for scalar and timestamp values.
    pub attribute: bool,
    /// Final transform applied to the output name, after any rename.
    pub transform: Option<fn(&str) -> String>,
}

/// One declared field: name, configuration, and current value.
///
/// A field whose value is `None` contributes nothing to the output, not even
/// an empty element.
#[derive(Debug)]
pub struct Field<'a> {
    /// Declared name, used as the element or attribute name unless renamed.
    pub name: &'static str,
    /// Per-field configuration.
    pub options: FieldOptions,
    /// Current value; `None` is skipped entirely.
    pub value: Option<Value<'a>>,
}

impl<'a> Field<'a> {
    /// A field with default options.
    #[must_use]
    pub fn new(name: &'static str, value: Option<Value<'a>>) -> Self {
        Self {
            name,
            options: FieldOptions::default(),
            value,
        }
    }

    /// A scalar field that is always present.
    #[must_use]
    pub fn scalar(name: &'static str, value: impl Into<Scalar>) -> Self {
        Self::new(name, Some(Value::Scalar(value.into())))
    }

    /// A scalar field that may be absent.
    #[must_use]
    pub fn opt_scalar(name: &'static str, value: Option<impl Into<Scalar>>) -> Self {
        Self::new(name, value.map(|v| Value::Scalar(v.into())))
    }

    /// A timestamp field that is always present.
    #[must_use]
    pub fn timestamp(name: &'static str, value: DateTime<Utc>) -> Self {
        Self::new(name, Some(Value::DateTime(value)))
    }

    /// A timestamp field that may be absent.
    #[must_use]
    pub fn opt_timestamp(name: &'static str, value: Option<DateTime<Utc>>) -> Self {
        Self::new(name, value.map(Value::DateTime))
    }

    /// A sequence field.
    #[must_use]
    pub fn sequence(name: &'static str, items: Vec<&'a dyn XmlSchema>) -> Self {
        Self::new(name, Some(Value::Sequence(items)))
    }

    /// A nested object field that is always present.
    #[must_use]
    pub fn complex(name: &'static str, value: &'a dyn XmlSchema) -> Self {
        Self::new(name, Some(Value::Complex(value)))
    }

    /// A nested object field that may be absent.
    #[must_use]
    pub fn opt_complex(name: &'static str, value: Option<&'a dyn XmlSchema>) -> Self {
        Self::new(name, value.map(Value::Complex))
    }

    /// Attach non-default options.
    #[must_use]
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_render_booleans_lowercase() {
        assert_eq!(Scalar::from(true).render(), "true");
        assert_eq!(Scalar::from(false).render(), "false");
    }

    #[test]
    fn test_should_render_numbers_invariantly() {
        assert_eq!(Scalar::from(-42i32).render(), "-42");
        assert_eq!(Scalar::from(42u64).render(), "42");
        assert_eq!(Scalar::from(1.5f64).render(), "1.5");
    }

    #[test]
    fn test_should_render_text_verbatim() {
        assert_eq!(Scalar::from("hello").render(), "hello");
        assert_eq!(Scalar::from(String::from("world")).render(), "world");
    }

    #[test]
    fn test_should_skip_absent_optional_scalar() {
        let field = Field::opt_scalar("Email", None::<&str>);
        assert!(field.value.is_none());
    }
}
