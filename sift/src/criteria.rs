//! Criteria: an immutable, storage-agnostic query specification.

use crate::filter::Filter;
use crate::order::{Order, OrderDirection};
use serde::{Deserialize, Serialize};

/// A complete query specification: filters, pagination, ordering.
///
/// Criteria are built once through [`CriteriaBuilder`] and then handed to a
/// backend converter read-only. Filters and orders keep their insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    filters: Vec<Filter>,
    offset: Option<usize>,
    limit: Option<usize>,
    orders: Vec<Order>,
}

impl Criteria {
    pub fn builder() -> CriteriaBuilder {
        CriteriaBuilder::default()
    }

    /// Top-level filters, in insertion order
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Number of results to skip, if set
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Maximum number of results, if set
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Sort specs, in insertion order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

/// Consuming builder for [`Criteria`]
#[derive(Debug, Clone, Default)]
pub struct CriteriaBuilder {
    filters: Vec<Filter>,
    offset: Option<usize>,
    limit: Option<usize>,
    orders: Vec<Order>,
}

impl CriteriaBuilder {
    /// Append a top-level filter
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Append a sort spec
    pub fn order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    /// Append an ascending sort on the given field
    pub fn order_asc(self, by: impl Into<String>) -> Self {
        self.order(Order::new(by, OrderDirection::Asc))
    }

    /// Append a descending sort on the given field
    pub fn order_desc(self, by: impl Into<String>) -> Self {
        self.order(Order::new(by, OrderDirection::Desc))
    }

    pub fn build(self) -> Criteria {
        Criteria {
            filters: self.filters,
            offset: self.offset,
            limit: self.limit,
            orders: self.orders,
        }
    }
}
