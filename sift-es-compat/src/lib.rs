//! Elasticsearch compatibility layer for sift criteria
//!
//! This crate translates a storage-agnostic [`sift::Criteria`] into the JSON
//! body expected by Elasticsearch's search API, so application code can
//! describe *what* to search for and leave the query-language shape to the
//! converter. The converter is a pure transform: it performs no I/O and
//! never mutates the criteria it is given.
//!
//! # Clause mapping
//!
//! - `eq` / `neq` → `term` (or an `exists` check when the value is null)
//! - `in` / `not_in` → `terms`
//! - `gt` / `gte` / `lt` / `lte` → `range`
//! - `contains` / `ends_with` → `wildcard`
//! - `starts_with` → `prefix`
//! - `And` / `Or` nodes → `bool.must` / `bool.should`
//!
//! Logical field names are remapped to physical ones through the field map
//! given at construction; unmapped names pass through unchanged.
//!
//! ```
//! use sift::{Criteria, Filter};
//! use sift_es_compat::EsQueryConverter;
//! use std::collections::HashMap;
//!
//! let converter = EsQueryConverter::new("users", HashMap::new());
//! let criteria = Criteria::builder()
//!     .filter(Filter::eq("status", "active"))
//!     .limit(10)
//!     .build();
//!
//! let body = converter.convert(&criteria)?;
//! assert_eq!(body.size, Some(10));
//! # Ok::<(), sift_es_compat::ConvertError>(())
//! ```

pub mod error;
pub mod query;

pub use error::ConvertError;
pub use query::{EsQueryConverter, EsSearchBody};

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
