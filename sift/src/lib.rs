//! Storage-agnostic search criteria.
//!
//! A [`Criteria`] describes *what* to search for — a boolean filter tree,
//! pagination, and ordering — without committing to any storage engine's
//! query language. Backend crates translate criteria into concrete query
//! shapes (see `sift-es-compat` for Elasticsearch).
//!
//! ```
//! use sift::{Criteria, Filter};
//!
//! let criteria = Criteria::builder()
//!     .filter(Filter::or(vec![
//!         Filter::eq("status", "active"),
//!         Filter::eq("status", "pending"),
//!     ]))
//!     .filter(Filter::gte("age", 18))
//!     .order_desc("created_at")
//!     .limit(20)
//!     .build();
//!
//! assert_eq!(criteria.filters().len(), 2);
//! ```

pub mod criteria;
pub mod filter;
pub mod order;

pub use criteria::{Criteria, CriteriaBuilder};
pub use filter::{Condition, Filter, FilterOperator};
pub use order::{Order, OrderDirection};
