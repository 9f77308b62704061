//! Sort specifications for search criteria.

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// One sort spec: a logical field name plus a direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    by: String,
    direction: OrderDirection,
}

impl Order {
    pub fn new(by: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            by: by.into(),
            direction,
        }
    }

    /// Ascending sort on the given field
    pub fn asc(by: impl Into<String>) -> Self {
        Self::new(by, OrderDirection::Asc)
    }

    /// Descending sort on the given field
    pub fn desc(by: impl Into<String>) -> Self {
        Self::new(by, OrderDirection::Desc)
    }

    pub fn by(&self) -> &str {
        &self.by
    }

    pub fn direction(&self) -> OrderDirection {
        self.direction
    }
}
