//! Account query.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::graphql_parse;

/// Builds a query returning the account and its plan.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_account_query(with_complexity: bool) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            account {{
                id
                name
                slug
                tier
                country_code
                plan {{
                    max_users
                    tier
                    period
                    version
                }}
            }}
        }}
        "
    ))
}
