//! Criteria to Elasticsearch query translation

pub mod converter;
pub mod types;

pub use converter::EsQueryConverter;
pub use types::EsSearchBody;
