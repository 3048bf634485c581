//! Item and subitem queries and mutations.

use serde_json::Value;

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::{add_column_values, add_subitems, add_updates, complexity};
use crate::graphql::helpers::{format_ids, format_param_value, graphql_parse, monday_json_stringify};
use crate::graphql::params::{ItemByColumnValuesParam, QueryParams};
use crate::graphql::queries::updates::UPDATE_FIELDS;
use crate::graphql::queries::users::paginated_limit;
use crate::graphql::types::Id;

/// Largest page monday.com returns from `items_page` and `next_items_page`.
pub const MAX_ITEMS_PAGE_LIMIT: u32 = 500;

/// Optional selections returned with each item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemFields {
    /// Include column values (default: `true`).
    pub column_values: bool,
    /// Include subitems.
    pub subitems: bool,
    /// Include the latest updates.
    pub updates: bool,
}

impl Default for ItemFields {
    fn default() -> Self {
        Self {
            column_values: true,
            subitems: false,
            updates: false,
        }
    }
}

impl ItemFields {
    /// Only the base item fields.
    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            column_values: false,
            subitems: false,
            updates: false,
        }
    }

    /// Column values, subitems and updates.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            column_values: true,
            subitems: true,
            updates: true,
        }
    }

    fn selection(self, with_group: bool) -> String {
        let updates = if self.updates { add_updates() } else { "" };
        let column_values = if self.column_values {
            add_column_values()
        } else {
            ""
        };
        let subitems = if self.subitems { add_subitems() } else { "" };
        let group = if with_group {
            "group { id title color }"
        } else {
            ""
        };
        format!("id name state {updates} {column_values} {subitems} url {group}")
    }
}

/// Parameters for fetching items by ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemListParams {
    /// The items to fetch. `limit` becomes the number of IDs.
    pub ids: Vec<Id>,
    /// Return the most recently created items first.
    pub newest_first: Option<bool>,
    /// Skip inactive and deleted items.
    pub exclude_nonactive: Option<bool>,
    /// Maximum number of items to return (default: 25).
    pub limit: u32,
    /// Page number, starting at 1.
    pub page: u32,
}

impl Default for ItemListParams {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            newest_first: None,
            exclude_nonactive: None,
            limit: 25,
            page: 1,
        }
    }
}

impl ItemListParams {
    /// Creates parameters fetching the given items.
    #[must_use]
    pub fn new(ids: Vec<Id>) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }
}

/// Builds a query fetching items by ID.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_items_by_id_query(
    params: &ItemListParams,
    fields: ItemFields,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let limit = paginated_limit(&params.ids, params.limit);
    let ids = format_ids(&params.ids);
    let newest_first = format_param_value(&params.newest_first);
    let exclude_nonactive = format_param_value(&params.exclude_nonactive);
    let page = params.page;
    let selection = fields.selection(true);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            items (
                ids: {ids},
                newest_first: {newest_first},
                exclude_nonactive: {exclude_nonactive},
                limit: {limit},
                page: {page}
            ) {{
                {selection}
            }}
        }}
        "
    ))
}

/// Builds a query fetching the first page of items on boards.
///
/// `query_params` filters and sorts the items. It cannot be combined with
/// a cursor and is dropped when `cursor` is set. `limit` is clamped to
/// [`MAX_ITEMS_PAGE_LIMIT`].
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_items_by_board_query(
    board_ids: &[Id],
    query_params: Option<&QueryParams>,
    limit: u32,
    cursor: Option<&str>,
    fields: ItemFields,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_ids = format_ids(board_ids);
    let page_args = items_page_args(query_params, limit, cursor);
    let selection = fields.selection(true);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            boards (ids: {board_ids}) {{
                items_page ({page_args}) {{
                    cursor
                    items {{
                        {selection}
                    }}
                }}
            }}
        }}
        "
    ))
}

/// Builds a query fetching the first page of items in a group.
///
/// `query_params` is dropped when `cursor` is set. `limit` is clamped to
/// [`MAX_ITEMS_PAGE_LIMIT`].
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_items_by_group_query(
    board_id: impl Into<Id>,
    group_id: &str,
    query_params: Option<&QueryParams>,
    limit: u32,
    cursor: Option<&str>,
    fields: ItemFields,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let group_id = format_param_value(group_id);
    let page_args = items_page_args(query_params, limit, cursor);
    let selection = fields.selection(false);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            boards (ids: {board_id}) {{
                groups (ids: {group_id}) {{
                    items_page ({page_args}) {{
                        cursor
                        items {{
                            {selection}
                        }}
                    }}
                }}
            }}
        }}
        "
    ))
}

/// Builds a query fetching items whose column holds any of the given
/// values.
///
/// The column filter is dropped when `cursor` is set.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_items_by_column_value_query(
    board_id: impl Into<Id>,
    column_id: &str,
    column_values: &[&str],
    limit: u32,
    cursor: Option<&str>,
    fields: ItemFields,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let columns = ItemByColumnValuesParam::new().add_column(column_id, column_values.iter().copied());
    get_items_by_multiple_column_values_query(
        board_id,
        &columns,
        limit,
        cursor,
        fields,
        with_complexity,
    )
}

/// Builds a query fetching items matching values in several columns.
///
/// The column filter is dropped when `cursor` is set.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_items_by_multiple_column_values_query(
    board_id: impl Into<Id>,
    columns: &ItemByColumnValuesParam,
    limit: u32,
    cursor: Option<&str>,
    fields: ItemFields,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let cursor_value = format_param_value(&cursor);
    let columns = if cursor.is_some() || columns.is_empty() {
        String::new()
    } else {
        format!("columns: {columns}")
    };
    let selection = fields.selection(true);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            items_page_by_column_values (
                board_id: {board_id},
                limit: {limit},
                cursor: {cursor_value},
                {columns}
            ) {{
                cursor
                items {{
                    {selection}
                }}
            }}
        }}
        "
    ))
}

/// Builds a query fetching the page of items after `cursor`.
///
/// `limit` is clamped to [`MAX_ITEMS_PAGE_LIMIT`].
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn next_items_page_query(
    cursor: &str,
    limit: u32,
    fields: ItemFields,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let cursor = format_param_value(cursor);
    let limit = limit.min(MAX_ITEMS_PAGE_LIMIT);
    let selection = fields.selection(true);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            next_items_page (
                cursor: {cursor},
                limit: {limit}
            ) {{
                cursor
                items {{
                    {selection}
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation creating an item.
///
/// `column_values` maps column IDs to values and is sent double-encoded.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_item_query(
    item_name: &str,
    board_id: impl Into<Id>,
    group_id: Option<&str>,
    column_values: Option<&Value>,
    create_labels_if_missing: bool,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let item_name = format_param_value(item_name);
    let board_id = format_param_value(&board_id.into());
    let group_id = format_param_value(&group_id);
    let column_values = monday_json_stringify(column_values);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_item (
                item_name: {item_name},
                board_id: {board_id},
                group_id: {group_id},
                column_values: {column_values},
                create_labels_if_missing: {create_labels_if_missing}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}

/// Builds a mutation duplicating an item, optionally with its updates.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn duplicate_item_query(
    board_id: impl Into<Id>,
    item_id: impl Into<Id>,
    with_updates: Option<bool>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let item_id = format_param_value(&item_id.into());
    let with_updates = format_param_value(&with_updates);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            duplicate_item (
                board_id: {board_id},
                with_updates: {with_updates},
                item_id: {item_id}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}

/// Builds a mutation archiving an item.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn archive_item_query(
    item_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    item_mutation("archive_item", &item_id.into(), with_complexity)
}

/// Builds a mutation deleting an item.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_item_query(
    item_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    item_mutation("delete_item", &item_id.into(), with_complexity)
}

/// Builds a query listing the subitems of an item.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_subitems_by_parent_item_query(
    parent_item_id: impl Into<Id>,
    with_column_values: bool,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let parent_item_id = format_param_value(&parent_item_id.into());
    let column_values = if with_column_values {
        add_column_values()
    } else {
        ""
    };
    graphql_parse(&format!(
        r"
        query {{{complexity}
            items (ids: {parent_item_id}) {{
                subitems {{
                    id
                    name
                    state
                    {column_values}
                    url
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation creating a subitem.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_subitem_query(
    parent_item_id: impl Into<Id>,
    subitem_name: &str,
    column_values: Option<&Value>,
    create_labels_if_missing: bool,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let parent_item_id = format_param_value(&parent_item_id.into());
    let subitem_name = format_param_value(subitem_name);
    let column_values = monday_json_stringify(column_values);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_subitem (
                parent_item_id: {parent_item_id},
                item_name: {subitem_name},
                column_values: {column_values},
                create_labels_if_missing: {create_labels_if_missing}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}

/// Builds a mutation changing several column values of an item at once.
///
/// `column_values` maps column IDs to values.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn change_multiple_item_column_values_query(
    item_id: impl Into<Id>,
    board_id: impl Into<Id>,
    column_values: &Value,
    create_labels_if_missing: bool,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let item_id = format_param_value(&item_id.into());
    let board_id = format_param_value(&board_id.into());
    let column_values = monday_json_stringify(Some(column_values));
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            change_multiple_column_values (
                item_id: {item_id},
                board_id: {board_id},
                column_values: {column_values},
                create_labels_if_missing: {create_labels_if_missing}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}

/// Builds a mutation setting one column of an item to a JSON value.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn change_item_column_json_value_query(
    item_id: impl Into<Id>,
    column_id: &str,
    board_id: impl Into<Id>,
    value: &Value,
    create_labels_if_missing: bool,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let item_id = format_param_value(&item_id.into());
    let column_id = format_param_value(column_id);
    let board_id = format_param_value(&board_id.into());
    let value = monday_json_stringify(Some(value));
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            change_column_value (
                item_id: {item_id},
                column_id: {column_id},
                board_id: {board_id},
                value: {value},
                create_labels_if_missing: {create_labels_if_missing}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}

/// Builds a mutation setting one column of an item to a plain string.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn change_item_column_simple_value_query(
    item_id: impl Into<Id>,
    column_id: &str,
    board_id: impl Into<Id>,
    value: &str,
    create_labels_if_missing: bool,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let item_id = format_param_value(&item_id.into());
    let column_id = format_param_value(column_id);
    let board_id = format_param_value(&board_id.into());
    let value = format_param_value(value);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            change_simple_column_value (
                item_id: {item_id},
                column_id: {column_id},
                board_id: {board_id},
                value: {value},
                create_labels_if_missing: {create_labels_if_missing}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}

/// Builds the multipart mutation adding a file to a file column.
///
/// The document declares `$file: File!`; send it with
/// [`GraphqlClient::upload_file`](crate::clients::graphql::GraphqlClient::upload_file).
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn upload_file_to_column_query(
    item_id: impl Into<Id>,
    column_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let item_id = format_param_value(&item_id.into());
    let column_id = format_param_value(column_id);
    graphql_parse(&format!(
        r"
        mutation ($file: File!) {{{complexity}
            add_file_to_column (
                item_id: {item_id},
                column_id: {column_id},
                file: $file
            ) {{
                id
                name
                url
            }}
        }}
        "
    ))
}

/// Builds a query listing the updates of an item.
///
/// When `ids` is non-empty, `limit` becomes the number of IDs.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_item_updates_query(
    item_id: impl Into<Id>,
    ids: &[Id],
    limit: u32,
    page: u32,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let item_id = format_param_value(&item_id.into());
    let limit = paginated_limit(ids, limit);
    let ids = format_ids(ids);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            items (ids: {item_id}) {{
                updates (ids: {ids}, limit: {limit}, page: {page}) {{
                    {UPDATE_FIELDS}
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation removing all updates of an item.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn clear_item_updates_query(
    item_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    item_mutation("clear_item_updates", &item_id.into(), with_complexity)
}

/// Builds a mutation moving an item to another group of its board.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn move_item_to_group_query(
    item_id: impl Into<Id>,
    group_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let item_id = format_param_value(&item_id.into());
    let group_id = format_param_value(group_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            move_item_to_group (
                item_id: {item_id},
                group_id: {group_id}
            ) {{
                id
                name
                group {{
                    id
                    title
                    color
                }}
            }}
        }}
        "
    ))
}

fn items_page_args(query_params: Option<&QueryParams>, limit: u32, cursor: Option<&str>) -> String {
    let limit = limit.min(MAX_ITEMS_PAGE_LIMIT);
    let cursor_value = format_param_value(&cursor);
    match query_params {
        Some(params) if cursor.is_none() => {
            format!("limit: {limit}, cursor: {cursor_value}, query_params: {params}")
        }
        _ => format!("limit: {limit}, cursor: {cursor_value}"),
    }
}

fn item_mutation(
    field: &str,
    item_id: &Id,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let item_id = format_param_value(item_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            {field} (item_id: {item_id}) {{
                id
                name
            }}
        }}
        "
    ))
}
