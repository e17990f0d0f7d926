//! XML document tree for `xmlmap`.
//!
//! This crate provides the output representation of the mapper: an owned,
//! immutable-after-construction tree of elements and attributes, plus a
//! writer that renders a [`Document`] to XML text.
//!
//! # Conventions
//!
//! - A document carries at most one namespace, shared by the top-level
//!   element and every descendant; attributes are never namespace-qualified.
//! - Child elements keep insertion order; attribute names are unique within
//!   an element (setting an existing name replaces its value).
//! - The writer emits `<?xml version="1.0" encoding="UTF-8"?>`, declares the
//!   namespace as `xmlns` on the top-level element only, and performs no
//!   pretty-printing.

pub mod node;
pub mod write;

pub use node::{Attribute, Document, Element};
pub use write::{WriteError, to_xml};
