//! Notification mutation.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{format_param_value, graphql_parse};
use crate::graphql::types::{Id, TargetType};

/// Builds a mutation sending a notification to a user.
///
/// `target_id` is an item or board ID for [`TargetType::Project`], and an
/// update or reply ID for [`TargetType::Post`].
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_notification_query(
    user_id: impl Into<Id>,
    target_id: impl Into<Id>,
    text: &str,
    target_type: TargetType,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let user_id = format_param_value(&user_id.into());
    let target_id = format_param_value(&target_id.into());
    let text = format_param_value(text);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_notification (
                user_id: {user_id},
                target_id: {target_id},
                text: {text},
                target_type: {target_type}
            ) {{
                text
            }}
        }}
        "
    ))
}
