//! API version queries.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::graphql_parse;

/// Builds a query returning the API version the request was served with.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_current_api_version_query(with_complexity: bool) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            version {{
                display_name
                kind
                value
            }}
        }}
        "
    ))
}

/// Builds a query listing every available API version.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_all_api_versions_query(with_complexity: bool) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            versions {{
                display_name
                kind
                value
            }}
        }}
        "
    ))
}
