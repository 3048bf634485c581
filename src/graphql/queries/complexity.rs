//! Complexity query.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::add_complexity;
use crate::graphql::helpers::graphql_parse;

/// Builds a query returning only the current complexity budget.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_complexity_query() -> Result<String, QuerySyntaxError> {
    graphql_parse(&format!("query {{{}}}", add_complexity()))
}
