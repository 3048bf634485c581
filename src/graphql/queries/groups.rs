//! Group queries and mutations.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{format_enum_value, format_param_value, graphql_parse};
use crate::graphql::types::{GroupAttributes, GroupColors, Id, PositionRelative};

/// Builds a query listing the groups of a board, optionally filtered by
/// group IDs.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_groups_by_board_query(
    board_id: impl Into<Id>,
    ids: &[&str],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let ids = if ids.is_empty() {
        "null".to_string()
    } else {
        format_param_value(ids)
    };
    graphql_parse(&format!(
        r"
        query {{{complexity}
            boards (ids: {board_id}) {{
                groups (ids: {ids}) {{
                    id
                    title
                    color
                    position
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation creating a group, optionally colored and placed
/// before or after another group.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_group_query(
    board_id: impl Into<Id>,
    group_name: &str,
    group_color: Option<GroupColors>,
    relative_to: Option<&str>,
    position_relative_method: Option<PositionRelative>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let group_name = format_param_value(group_name);
    let group_color = format_param_value(&group_color);
    let relative_to = format_param_value(&relative_to);
    let position_relative_method = format_enum_value(position_relative_method);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_group (
                board_id: {board_id},
                group_name: {group_name},
                group_color: {group_color},
                relative_to: {relative_to},
                position_relative_method: {position_relative_method}
            ) {{
                id
                title
                color
            }}
        }}
        "
    ))
}

/// Builds a mutation changing one attribute of a group.
///
/// For [`GroupAttributes::Color`], pass a
/// [`GroupUpdateColors`](crate::graphql::types::GroupUpdateColors) value
/// via `as_str()`. For the relative position attributes, pass a group ID.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn update_group_query(
    board_id: impl Into<Id>,
    group_id: &str,
    group_attribute: GroupAttributes,
    new_value: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let group_id = format_param_value(group_id);
    let new_value = format_param_value(new_value);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            update_group (
                board_id: {board_id},
                group_id: {group_id},
                group_attribute: {group_attribute},
                new_value: {new_value}
            ) {{
                id
                title
                color
                position
            }}
        }}
        "
    ))
}

/// Builds a mutation duplicating a group on the same board.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn duplicate_group_query(
    board_id: impl Into<Id>,
    group_id: &str,
    add_to_top: Option<bool>,
    group_title: Option<&str>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let group_id = format_param_value(group_id);
    let add_to_top = format_param_value(&add_to_top);
    let group_title = format_param_value(&group_title);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            duplicate_group (
                board_id: {board_id},
                group_id: {group_id},
                add_to_top: {add_to_top},
                group_title: {group_title}
            ) {{
                id
                title
            }}
        }}
        "
    ))
}

/// Builds a mutation archiving a group.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn archive_group_query(
    board_id: impl Into<Id>,
    group_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    group_mutation("archive_group", &board_id.into(), group_id, with_complexity)
}

/// Builds a mutation deleting a group and its items.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_group_query(
    board_id: impl Into<Id>,
    group_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    group_mutation("delete_group", &board_id.into(), group_id, with_complexity)
}

fn group_mutation(
    field: &str,
    board_id: &Id,
    group_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(board_id);
    let group_id = format_param_value(group_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            {field} (
                board_id: {board_id},
                group_id: {group_id}
            ) {{
                id
            }}
        }}
        "
    ))
}
