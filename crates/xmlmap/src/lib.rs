//! Schema-driven mapping of Rust object graphs to XML documents.
//!
//! Types describe themselves through [`XmlSchema`]: an explicit, ordered
//! list of fields with per-field options (rename, attribute output, name
//! transform). [`serialize_document`] walks that schema depth-first and
//! builds an [`xmlmap_tree::Document`], which [`to_xml`] renders to text.
//!
//! # Key behaviors
//!
//! - Fields with an absent value are skipped entirely, not emitted empty.
//! - Scalar fields flagged as attributes land on the parent element with an
//!   un-namespaced name.
//! - Sequence items all share the first item's type name as their tag.
//! - One optional namespace qualifies the whole document.
//!
//! # Example
//!
//! ```
//! use xmlmap::{Field, SerializationOptions, XmlSchema, serialize_document, to_xml};
//!
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! impl XmlSchema for User {
//!     fn type_name(&self) -> &str {
//!         "User"
//!     }
//!
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::scalar("Id", self.id),
//!             Field::scalar("Name", self.name.as_str()),
//!         ]
//!     }
//! }
//!
//! let user = User { id: 7, name: "ada".into() };
//! let doc = serialize_document(&user, &SerializationOptions::new()).unwrap();
//! let xml = to_xml(&doc).unwrap();
//! assert_eq!(
//!     std::str::from_utf8(&xml).unwrap(),
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?><User><Id>7</Id><Name>ada</Name></User>"
//! );
//! ```

pub mod error;
pub mod mapper;
pub mod options;
pub mod schema;

pub use error::MapError;
pub use mapper::{map_into, serialize_document};
pub use options::{DateFormat, SerializationOptions};
pub use schema::{Field, FieldOptions, Scalar, Value, XmlSchema};
pub use xmlmap_tree::{Attribute, Document, Element, WriteError, to_xml};
