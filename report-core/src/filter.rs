//! Search, filter and sort criteria for the report list query.
//!
//! Criteria are kept as the raw text the user typed. Nothing is validated
//! here: a malformed credit score bound is forwarded to the backend as-is
//! and the backend decides whether to reject it.

use std::fmt;
use std::str::FromStr;

/// Column the backend sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Id,
    Name,
    Location,
    CreditScore,
    Tenure,
}

impl SortBy {
    /// Every sortable column, in the order the selector lists them.
    pub const ALL: [SortBy; 5] = [
        SortBy::Id,
        SortBy::Name,
        SortBy::Location,
        SortBy::CreditScore,
        SortBy::Tenure,
    ];

    /// Wire value of the `sortBy` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Id => "id",
            SortBy::Name => "name",
            SortBy::Location => "location",
            SortBy::CreditScore => "creditScore",
            SortBy::Tenure => "tenure",
        }
    }

    /// Human label for the selector.
    pub fn label(self) -> &'static str {
        match self {
            SortBy::Id => "ID",
            SortBy::Name => "Name",
            SortBy::Location => "Location",
            SortBy::CreditScore => "Credit Score",
            SortBy::Tenure => "Tenure",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub const ALL: [Order; 2] = [Order::Asc, Order::Desc];

    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Order::Asc => "Asc",
            Order::Desc => "Desc",
        }
    }
}

/// Returned when a selector value does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option: {}", self.0)
    }
}

impl std::error::Error for UnknownOption {}

impl FromStr for SortBy {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl FromStr for Order {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Order::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// A single-field edit to [`FilterCriteria`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Name(String),
    Location(String),
    MinCreditScore(String),
    MaxCreditScore(String),
    SortBy(SortBy),
    Order(Order),
}

/// The user's current search criteria.
///
/// Text fields hold exactly what was typed; an empty string means "no
/// constraint" and is left out of the query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on name (applied by the backend).
    pub name: String,
    /// Case-insensitive substring match on location (applied by the backend).
    pub location: String,
    pub min_credit_score: String,
    pub max_credit_score: String,
    pub sort_by: SortBy,
    pub order: Order,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow-merge one changed field.
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::Name(value) => self.name = value,
            FilterChange::Location(value) => self.location = value,
            FilterChange::MinCreditScore(value) => self.min_credit_score = value,
            FilterChange::MaxCreditScore(value) => self.max_credit_score = value,
            FilterChange::SortBy(sort_by) => self.sort_by = sort_by,
            FilterChange::Order(order) => self.order = order,
        }
    }

    /// Query parameters for `GET /api/report`.
    ///
    /// Only non-empty criteria are included; `sortBy`, `order` and `size`
    /// are always present.
    pub fn query_pairs(&self, page_size: u32) -> Vec<(&'static str, String)> {
        let optional = [
            ("name", &self.name),
            ("location", &self.location),
            ("minCreditScore", &self.min_credit_score),
            ("maxCreditScore", &self.max_credit_score),
        ];
        let mut pairs: Vec<(&'static str, String)> = optional
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key, value.clone()))
            .collect();
        pairs.push(("sortBy", self.sort_by.as_str().to_string()));
        pairs.push(("order", self.order.as_str().to_string()));
        pairs.push(("size", page_size.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sort_by_id_ascending() {
        let criteria = FilterCriteria::new();
        assert_eq!(criteria.sort_by, SortBy::Id);
        assert_eq!(criteria.order, Order::Asc);
        assert!(criteria.name.is_empty());
        assert!(criteria.min_credit_score.is_empty());
    }

    #[test]
    fn default_query_has_only_mandatory_params() {
        let pairs = FilterCriteria::new().query_pairs(1000);
        assert_eq!(
            pairs,
            vec![
                ("sortBy", "id".to_string()),
                ("order", "asc".to_string()),
                ("size", "1000".to_string()),
            ]
        );
    }

    #[test]
    fn apply_merges_one_field_and_keeps_the_rest() {
        let mut criteria = FilterCriteria::new();
        criteria.apply(FilterChange::Name("ann".to_string()));
        criteria.apply(FilterChange::Order(Order::Desc));
        criteria.apply(FilterChange::Location("Paris".to_string()));

        assert_eq!(criteria.name, "ann");
        assert_eq!(criteria.location, "Paris");
        assert_eq!(criteria.order, Order::Desc);
        assert_eq!(criteria.sort_by, SortBy::Id);
    }

    #[test]
    fn non_empty_fields_are_forwarded_verbatim() {
        let mut criteria = FilterCriteria::new();
        criteria.apply(FilterChange::MinCreditScore("abc".to_string()));
        criteria.apply(FilterChange::MaxCreditScore("800".to_string()));
        criteria.apply(FilterChange::SortBy(SortBy::CreditScore));

        let pairs = criteria.query_pairs(50);
        assert!(pairs.contains(&("minCreditScore", "abc".to_string())));
        assert!(pairs.contains(&("maxCreditScore", "800".to_string())));
        assert!(pairs.contains(&("sortBy", "creditScore".to_string())));
        assert!(pairs.contains(&("size", "50".to_string())));
        assert!(!pairs.iter().any(|(key, _)| *key == "name"));
    }

    #[test]
    fn clearing_a_field_drops_it_from_the_query() {
        let mut criteria = FilterCriteria::new();
        criteria.apply(FilterChange::Name("ann".to_string()));
        criteria.apply(FilterChange::Name(String::new()));
        assert!(!criteria.query_pairs(10).iter().any(|(key, _)| *key == "name"));
    }

    #[test]
    fn selector_values_parse() {
        assert_eq!("tenure".parse::<SortBy>(), Ok(SortBy::Tenure));
        assert_eq!("desc".parse::<Order>(), Ok(Order::Desc));
        assert!("salary".parse::<SortBy>().is_err());
    }
}
