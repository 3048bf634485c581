//! Structured arguments for item queries.

use std::fmt;

use serde_json::Value;

use crate::graphql::helpers::{format_dict_value, format_ids, format_param_value};
use crate::graphql::types::{Id, ItemsOrderByDirection, ItemsQueryOperator, ItemsQueryRuleOperator};

/// A rule of an items query.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemsQueryRule {
    /// The column to filter by.
    pub column_id: String,
    /// The value to compare against: a string, an index or a list of them,
    /// depending on the column type.
    pub compare_value: Value,
    /// The comparison.
    pub operator: ItemsQueryRuleOperator,
}

/// A sort key of an items query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemsQueryOrderBy {
    /// The column to sort by.
    pub column_id: String,
    /// The sort direction.
    pub direction: ItemsOrderByDirection,
}

/// The `query_params` argument of `items_page`: filtering, sorting and
/// scoping an items query.
///
/// Renders as a GraphQL `ItemsQuery` input object.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::params::QueryParams;
/// use monday_async::graphql::types::{ItemsOrderByDirection, ItemsQueryOperator, ItemsQueryRuleOperator};
/// use serde_json::json;
///
/// let params = QueryParams::new()
///     .operator(ItemsQueryOperator::Or)
///     .order_by("date4", ItemsOrderByDirection::Descending)
///     .add_rule("status", json!([1]), ItemsQueryRuleOperator::AnyOf);
///
/// assert_eq!(
///     params.to_string(),
///     r#"{rules: [{column_id: "status", compare_value: [1], operator: any_of}], operator: or, order_by: [{column_id: "date4", direction: desc}]}"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    ids: Vec<Id>,
    operator: ItemsQueryOperator,
    order_by: Vec<ItemsQueryOrderBy>,
    rules: Vec<ItemsQueryRule>,
}

impl QueryParams {
    /// Creates empty parameters combining rules with `and`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to these item IDs (at most 100).
    #[must_use]
    pub fn ids(mut self, ids: Vec<Id>) -> Self {
        self.ids = ids;
        self
    }

    /// Sets how the rules combine.
    #[must_use]
    pub const fn operator(mut self, operator: ItemsQueryOperator) -> Self {
        self.operator = operator;
        self
    }

    /// Adds a sort key.
    #[must_use]
    pub fn order_by(mut self, column_id: impl Into<String>, direction: ItemsOrderByDirection) -> Self {
        self.order_by.push(ItemsQueryOrderBy {
            column_id: column_id.into(),
            direction,
        });
        self
    }

    /// Adds a filter rule.
    #[must_use]
    pub fn add_rule(
        mut self,
        column_id: impl Into<String>,
        compare_value: impl Into<Value>,
        operator: ItemsQueryRuleOperator,
    ) -> Self {
        self.rules.push(ItemsQueryRule {
            column_id: column_id.into(),
            compare_value: compare_value.into(),
            operator,
        });
        self
    }

    /// Returns the rules added so far.
    #[must_use]
    pub fn rules(&self) -> &[ItemsQueryRule] {
        &self.rules
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Vec::new();

        if !self.ids.is_empty() {
            fields.push(format!("ids: {}", format_ids(&self.ids)));
        }

        let rules: Vec<String> = self
            .rules
            .iter()
            .map(|rule| {
                format!(
                    "{{column_id: {}, compare_value: {}, operator: {}}}",
                    format_param_value(&rule.column_id),
                    format_param_value(&rule.compare_value),
                    rule.operator
                )
            })
            .collect();
        fields.push(format!("rules: [{}]", rules.join(", ")));
        fields.push(format!("operator: {}", self.operator));

        if !self.order_by.is_empty() {
            let order_by: Vec<String> = self
                .order_by
                .iter()
                .map(|o| {
                    format!(
                        "{{column_id: {}, direction: {}}}",
                        format_param_value(&o.column_id),
                        o.direction
                    )
                })
                .collect();
            fields.push(format!("order_by: [{}]", order_by.join(", ")));
        }

        write!(f, "{{{}}}", fields.join(", "))
    }
}

/// The `columns` argument of `items_page_by_column_values`.
///
/// Renders as a list of `{column_id, column_values}` objects.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::params::ItemByColumnValuesParam;
///
/// let columns = ItemByColumnValuesParam::new()
///     .add_column("status", ["Done", "Stuck"])
///     .add_column("text", ["hello"]);
///
/// assert_eq!(
///     columns.to_string(),
///     r#"[{column_id: "status", column_values: ["Done","Stuck"]}, {column_id: "text", column_values: ["hello"]}]"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemByColumnValuesParam {
    columns: Vec<(String, Vec<String>)>,
}

impl ItemByColumnValuesParam {
    /// Creates an empty column filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches items whose `column_id` holds any of `column_values`.
    #[must_use]
    pub fn add_column<I, S>(mut self, column_id: impl Into<String>, column_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.push((
            column_id.into(),
            column_values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Returns `true` when no column was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for ItemByColumnValuesParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|(column_id, values)| {
                format_dict_value(&[
                    ("column_id", Value::from(column_id.as_str())),
                    ("column_values", Value::from(values.clone())),
                ])
            })
            .collect();
        write!(f, "[{}]", columns.join(", "))
    }
}
