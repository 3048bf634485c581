//! Update queries and mutations.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{format_ids, format_param_value, graphql_parse};
use crate::graphql::queries::users::paginated_limit;
use crate::graphql::types::Id;

/// Fields selected for every update, shared with the item updates query.
pub(crate) const UPDATE_FIELDS: &str = r"
    id
    text_body
    body
    creator_id
    assets {
        id
        name
        file_extension
        url
        public_url
    }
    replies {
        id
        text_body
    }
    likes {
        id
        reaction_type
        creator_id
        updated_at
    }
";

/// Builds a query listing updates, optionally restricted to the given IDs.
///
/// When `ids` is non-empty, `limit` becomes the number of IDs.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_updates_query(
    ids: &[Id],
    limit: u32,
    page: u32,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let limit = paginated_limit(ids, limit);
    let ids = format_ids(ids);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            updates (ids: {ids}, limit: {limit}, page: {page}) {{
                {UPDATE_FIELDS}
            }}
        }}
        "
    ))
}

/// Builds a mutation posting an update on an item, or a reply when
/// `parent_id` is set.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_update_query(
    body: &str,
    item_id: impl Into<Id>,
    parent_id: Option<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let body = format_param_value(body);
    let item_id = format_param_value(&item_id.into());
    let parent_id = format_param_value(&parent_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_update (
                body: {body},
                item_id: {item_id},
                parent_id: {parent_id}
            ) {{
                id
                body
            }}
        }}
        "
    ))
}

/// Builds a mutation replacing the body of an update.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn edit_update_query(
    update_id: impl Into<Id>,
    body: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let update_id = format_param_value(&update_id.into());
    let body = format_param_value(body);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            edit_update (
                id: {update_id},
                body: {body}
            ) {{
                id
                body
            }}
        }}
        "
    ))
}

/// Builds a mutation pinning an update to the top of its item.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn pin_update_query(
    update_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    pin_mutation("pin_to_top", &update_id.into(), with_complexity)
}

/// Builds a mutation unpinning an update.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn unpin_update_query(
    update_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    pin_mutation("unpin_from_top", &update_id.into(), with_complexity)
}

/// Builds a mutation liking an update.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn like_update_query(
    update_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    like_mutation("like_update", &update_id.into(), with_complexity)
}

/// Builds a mutation removing a like from an update.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn unlike_update_query(
    update_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    like_mutation("unlike_update", &update_id.into(), with_complexity)
}

/// Builds a mutation deleting an update.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_update_query(
    update_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let update_id = format_param_value(&update_id.into());
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            delete_update (id: {update_id}) {{
                id
            }}
        }}
        "
    ))
}

/// Builds the multipart mutation attaching a file to an update.
///
/// The document declares `$file: File!`; send it with
/// [`GraphqlClient::upload_file`](crate::clients::graphql::GraphqlClient::upload_file).
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn add_file_to_update_query(
    update_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let update_id = format_param_value(&update_id.into());
    graphql_parse(&format!(
        r"
        mutation ($file: File!) {{{complexity}
            add_file_to_update (update_id: {update_id}, file: $file) {{
                id
            }}
        }}
        "
    ))
}

fn pin_mutation(
    field: &str,
    update_id: &Id,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let update_id = format_param_value(update_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            {field} (id: {update_id}) {{
                id
                item_id
            }}
        }}
        "
    ))
}

fn like_mutation(
    field: &str,
    update_id: &Id,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let update_id = format_param_value(update_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            {field} (update_id: {update_id}) {{
                id
                item_id
                likes {{
                    id
                    reaction_type
                }}
            }}
        }}
        "
    ))
}
