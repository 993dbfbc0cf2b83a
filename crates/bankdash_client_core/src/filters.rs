//! Transaction filters and their canonical query representation.

use crate::models::TransactionType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Amount,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Date => "date",
            SortBy::Amount => "amount",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionFilters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    #[serde(rename = "type")]
    pub type_: Option<TransactionType>,
    pub party: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

fn non_empty(s: &Option<String>) -> Option<String> {
    s.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn finite(n: Option<f64>) -> Option<String> {
    // f64 Display is the shortest round-trip form: 100 -> "100", 12.5 -> "12.5".
    n.filter(|v| v.is_finite()).map(|v| v.to_string())
}

impl TransactionFilters {
    pub fn sorted(sort_by: SortBy, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
            ..Self::default()
        }
    }

    /// Present fields only, in a fixed order; sort fields are always last and always present.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::with_capacity(8);
        let optional = [
            ("startDate", non_empty(&self.start_date)),
            ("endDate", non_empty(&self.end_date)),
            ("minAmount", finite(self.min_amount)),
            ("maxAmount", finite(self.max_amount)),
            ("type", self.type_.map(|t| t.as_str().to_string())),
            ("party", non_empty(&self.party)),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                q.push((key, v));
            }
        }
        q.push(("sortBy", self.sort_by.as_str().to_string()));
        q.push(("sortOrder", self.sort_order.as_str().to_string()));
        q
    }

    /// True when anything beyond the sort fields would be sent.
    pub fn has_active_filters(&self) -> bool {
        self.query_pairs().len() > 2
    }
}
