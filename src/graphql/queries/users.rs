//! User queries and mutations.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{format_ids, format_param_value, graphql_parse};
use crate::graphql::types::{BaseRoleName, Id, Product, UserKind};

const USER_FIELDS: &str = r"
    id
    email
    name
    title
    location
    phone
    teams {
        id
        name
    }
    url
    is_admin
    is_guest
    is_view_only
    is_pending
";

/// Parameters for listing users.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserListParams {
    /// Return only these users. When set, `limit` becomes the number of IDs.
    pub ids: Vec<Id>,
    /// Maximum number of users to return (default: 50).
    pub limit: u32,
    /// Which users to return (default: all).
    pub kind: UserKind,
    /// List the most recently created users first.
    pub newest_first: bool,
    /// Page number, starting at 1.
    pub page: u32,
}

impl Default for UserListParams {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            limit: 50,
            kind: UserKind::All,
            newest_first: false,
            page: 1,
        }
    }
}

/// Builds a query returning the user the API token belongs to.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_me_query(with_complexity: bool) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            me {{
                id
                name
                title
                location
                phone
                teams {{
                    id
                    name
                }}
                url
                is_admin
                is_guest
                is_view_only
                is_pending
            }}
        }}
        "
    ))
}

/// Builds a query listing users, or the users with the given IDs.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::queries::{get_users_query, UserListParams};
/// use monday_async::graphql::types::Id;
///
/// let params = UserListParams {
///     ids: vec![Id::from(1_u64), Id::from(2_u64)],
///     ..UserListParams::default()
/// };
/// let query = get_users_query(&params, false).unwrap();
/// assert!(query.contains("limit: 2"));
/// ```
pub fn get_users_query(
    params: &UserListParams,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let limit = paginated_limit(&params.ids, params.limit);
    let ids = format_ids(&params.ids);
    let kind = params.kind;
    let newest_first = params.newest_first;
    let page = params.page;
    graphql_parse(&format!(
        r"
        query {{{complexity}
            users (
                ids: {ids},
                limit: {limit},
                kind: {kind},
                newest_first: {newest_first},
                page: {page}
            ) {{
                {USER_FIELDS}
            }}
        }}
        "
    ))
}

/// Builds a query returning the users with the given emails.
///
/// The limit is the number of emails.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_users_by_email_query(
    emails: &[&str],
    kind: UserKind,
    newest_first: bool,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let limit = emails.len().max(1);
    let emails = format_param_value(emails);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            users (
                emails: {emails},
                limit: {limit},
                kind: {kind},
                newest_first: {newest_first}
            ) {{
                {USER_FIELDS}
            }}
        }}
        "
    ))
}

/// Builds a mutation changing the role of users.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn update_users_role_mutation(
    user_ids: &[Id],
    new_role: BaseRoleName,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let user_ids = format_ids(user_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            update_users_role (user_ids: {user_ids}, new_role: {new_role}) {{
                updated_users {{
                    id
                    name
                    is_admin
                    is_guest
                    is_view_only
                }}
                errors {{
                    message
                    code
                    user_id
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation deactivating users.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn deactivate_users_mutation(
    user_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let user_ids = format_ids(user_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            deactivate_users (user_ids: {user_ids}) {{
                deactivated_users {{
                    id
                    name
                }}
                errors {{
                    message
                    code
                    user_id
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation reactivating users.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn activate_users_mutation(
    user_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let user_ids = format_ids(user_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            activate_users (user_ids: {user_ids}) {{
                activated_users {{
                    id
                    name
                }}
                errors {{
                    message
                    code
                    user_id
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation moving users to a new email domain.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn update_users_email_domain_mutation(
    new_domain: &str,
    user_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let new_domain = format_param_value(new_domain);
    let user_ids = format_ids(user_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            update_email_domain (
                input: {{new_domain: {new_domain}, user_ids: {user_ids}}}
            ) {{
                updated_users {{
                    id
                    name
                    email
                }}
                errors {{
                    message
                    code
                    user_id
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation inviting users to the account.
///
/// Invited users stay pending until they accept.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn invite_users_mutation(
    emails: &[&str],
    product: Product,
    user_role: BaseRoleName,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let emails = format_param_value(emails);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            invite_users (emails: {emails}, product: {product}, user_role: {user_role}) {{
                errors {{
                    message
                    code
                    email
                }}
                invited_users {{
                    id
                    name
                }}
            }}
        }}
        "
    ))
}

/// A non-empty ID list overrides the page size with its length.
pub(crate) fn paginated_limit(ids: &[Id], limit: u32) -> u32 {
    if ids.is_empty() {
        limit
    } else {
        u32::try_from(ids.len()).unwrap_or(u32::MAX)
    }
}
