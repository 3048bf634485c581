//! Webhook queries and mutations.

use serde_json::Value;

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{format_param_value, graphql_parse, monday_json_stringify};
use crate::graphql::types::{Id, WebhookEventType};

/// Builds a query listing the webhooks of a board.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_webhooks_by_board_id_query(
    board_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    graphql_parse(&format!(
        r"
        query {{{complexity}
            webhooks (board_id: {board_id}) {{
                id
                event
                board_id
                config
            }}
        }}
        "
    ))
}

/// Builds a mutation subscribing `url` to `event` on a board.
///
/// `config` is sent double-encoded, e.g. `{"columnId": "status"}` for
/// [`WebhookEventType::ChangeSpecificColumnValue`].
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_webhook_query(
    board_id: impl Into<Id>,
    url: &str,
    event: WebhookEventType,
    config: Option<&Value>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let url = format_param_value(url);
    let config = monday_json_stringify(config);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_webhook (
                board_id: {board_id},
                url: {url},
                event: {event},
                config: {config}
            ) {{
                id
                board_id
                event
                config
            }}
        }}
        "
    ))
}

/// Builds a mutation deleting a webhook.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_webhook_query(
    webhook_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let webhook_id = format_param_value(&webhook_id.into());
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            delete_webhook (id: {webhook_id}) {{
                id
                board_id
            }}
        }}
        "
    ))
}
