//! Options controlling one serialization call.

use chrono::{DateTime, Utc};

/// Rendering policy for [`DateTime`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// Default chrono conversion (`2006-02-03 16:45:09 UTC`).
    #[default]
    None,
    /// ISO 8601 with milliseconds and `Z` suffix (`2006-02-03T16:45:09.000Z`).
    Iso8601,
    /// RFC 1123 (`Fri, 03 Feb 2006 16:45:09 GMT`).
    Rfc1123,
    /// RFC 3339 round-trip form, full sub-second precision.
    RoundTrip,
}

impl DateFormat {
    /// Render a timestamp according to this policy.
    #[must_use]
    pub fn render(self, timestamp: &DateTime<Utc>) -> String {
        match self {
            DateFormat::None => timestamp.to_string(),
            DateFormat::Iso8601 => timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            DateFormat::Rfc1123 => timestamp.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
            DateFormat::RoundTrip => timestamp.to_rfc3339(),
        }
    }
}

/// Options for one [`serialize_document`](crate::serialize_document) call.
///
/// Read-only for the duration of the call; the same options value may be
/// shared across concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct SerializationOptions {
    /// When set and non-empty, an extra outer element of this name wraps the
    /// mapped root element.
    pub root_element: Option<String>,
    /// Namespace URI shared by every element in the document. Unset means
    /// unqualified names.
    pub namespace: Option<String>,
    /// Rendering policy for timestamp values.
    pub date_format: DateFormat,
}

impl SerializationOptions {
    /// Options with no wrapper, no namespace, and default date conversion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options qualifying the whole document with a namespace URI.
    #[must_use]
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2006, 2, 3, 16, 45, 9).unwrap()
    }

    #[test]
    fn test_should_render_default_conversion() {
        assert_eq!(DateFormat::None.render(&timestamp()), "2006-02-03 16:45:09 UTC");
    }

    #[test]
    fn test_should_render_iso8601() {
        assert_eq!(
            DateFormat::Iso8601.render(&timestamp()),
            "2006-02-03T16:45:09.000Z"
        );
    }

    #[test]
    fn test_should_render_rfc1123() {
        assert_eq!(
            DateFormat::Rfc1123.render(&timestamp()),
            "Fri, 03 Feb 2006 16:45:09 GMT"
        );
    }

    #[test]
    fn test_should_default_to_no_wrapper_and_no_namespace() {
        let options = SerializationOptions::new();

        assert!(options.root_element.is_none());
        assert!(options.namespace.is_none());
        assert_eq!(options.date_format, DateFormat::None);
    }
}
