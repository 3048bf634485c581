//! Column queries and mutations.

use serde_json::Value;

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{
    format_enum_values, format_param_value, graphql_parse, monday_json_stringify,
};
use crate::graphql::types::{ColumnType, Id};

/// Parameters for creating a column.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateColumnParams {
    /// The column title.
    pub title: String,
    /// The column type.
    pub column_type: ColumnType,
    /// The column description.
    pub description: Option<String>,
    /// Column settings, such as status labels. Sent double-encoded.
    pub defaults: Option<Value>,
    /// A custom column ID: 1 to 20 lowercase letters or underscores, unique
    /// on the board and never reused.
    pub column_id: Option<String>,
    /// Place the column after this one.
    pub after_column_id: Option<String>,
}

impl CreateColumnParams {
    /// Creates parameters for a column with the given title and type.
    #[must_use]
    pub fn new(title: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            title: title.into(),
            column_type,
            description: None,
            defaults: None,
            column_id: None,
            after_column_id: None,
        }
    }
}

/// Builds a query listing the columns of a board, optionally filtered by
/// column IDs and types.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_columns_by_board_query(
    board_id: impl Into<Id>,
    ids: &[&str],
    types: &[ColumnType],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let ids = if ids.is_empty() {
        "null".to_string()
    } else {
        format_param_value(ids)
    };
    let types = format_enum_values(types);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            boards (ids: {board_id}) {{
                id
                name
                columns (ids: {ids}, types: {types}) {{
                    id
                    title
                    type
                    description
                    settings_str
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation creating a column.
///
/// The `id` argument is only sent when a custom column ID is given.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_column_query(
    board_id: impl Into<Id>,
    params: &CreateColumnParams,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let title = format_param_value(&params.title);
    let column_type = params.column_type;
    let description = format_param_value(&params.description);
    let defaults = monday_json_stringify(params.defaults.as_ref());
    let after_column_id = format_param_value(&params.after_column_id);
    let id = params
        .column_id
        .as_ref()
        .map_or_else(String::new, |id| format!("id: {}", format_param_value(id)));
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_column (
                board_id: {board_id},
                title: {title},
                column_type: {column_type},
                description: {description},
                defaults: {defaults},
                after_column_id: {after_column_id},
                {id}
            ) {{
                id
                title
                type
                description
            }}
        }}
        "
    ))
}

/// Builds a mutation renaming a column.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn change_column_title_query(
    board_id: impl Into<Id>,
    column_id: &str,
    title: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let column_id = format_param_value(column_id);
    let title = format_param_value(title);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            change_column_title (
                board_id: {board_id},
                column_id: {column_id},
                title: {title}
            ) {{
                id
                title
            }}
        }}
        "
    ))
}

/// Builds a mutation changing a column's description.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn change_column_description_query(
    board_id: impl Into<Id>,
    column_id: &str,
    description: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let column_id = format_param_value(column_id);
    let description = format_param_value(description);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            change_column_metadata (
                board_id: {board_id},
                column_id: {column_id},
                column_property: description,
                value: {description}
            ) {{
                id
                description
            }}
        }}
        "
    ))
}

/// Builds a mutation deleting a column.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_column_query(
    board_id: impl Into<Id>,
    column_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let column_id = format_param_value(column_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            delete_column (
                board_id: {board_id},
                column_id: {column_id}
            ) {{
                id
            }}
        }}
        "
    ))
}
