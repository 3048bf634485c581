//! Tag queries and mutations.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{format_ids, format_param_value, graphql_parse};
use crate::graphql::types::Id;

/// Builds a query listing the account's public tags, or the tags with the
/// given IDs.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_tags_query(ids: &[Id], with_complexity: bool) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let ids = format_ids(ids);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            tags (ids: {ids}) {{
                id
                name
                color
            }}
        }}
        "
    ))
}

/// Builds a query listing the tags used on a board.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_tags_by_board_query(
    board_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    graphql_parse(&format!(
        r"
        query {{{complexity}
            boards (ids: {board_id}) {{
                tags {{
                    id
                    name
                    color
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation returning the tag with this name, creating it first
/// when it does not exist.
///
/// Tags of private and shareable boards need `board_id`.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_or_get_tag_query(
    tag_name: &str,
    board_id: Option<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let tag_name = format_param_value(tag_name);
    let board_id = format_param_value(&board_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_or_get_tag (
                tag_name: {tag_name},
                board_id: {board_id}
            ) {{
                id
                name
                color
            }}
        }}
        "
    ))
}
