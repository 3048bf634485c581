//! Integration tests for the GraphQL document builders.
//!
//! Each builder's output is compared with a hand-written document run
//! through the same parser, so formatting differences do not matter.

use graphql_parser::query::{parse_query, Definition, OperationDefinition, Selection, Value};
use monday_async::graphql::helpers::graphql_parse;
use monday_async::graphql::queries::{
    archive_group_query, change_item_column_simple_value_query, create_item_query,
    create_notification_query, create_or_get_tag_query, create_update_query,
    create_webhook_query, create_workspace_query, delete_item_query, delete_webhook_query,
    get_complexity_query, get_webhooks_by_board_id_query, move_item_to_group_query,
    update_users_role_mutation,
};
use monday_async::graphql::types::{BaseRoleName, TargetType, WebhookEventType, WorkspaceKind};
use monday_async::Id;
use serde_json::json;

/// Parses an expected document into the canonical form builders return.
fn normalized(document: &str) -> String {
    graphql_parse(document).unwrap()
}

/// Returns the decoded string value of `argument` on the top-level `field`.
fn string_argument(document: &str, field: &str, argument: &str) -> String {
    let document = parse_query::<String>(document).unwrap();
    let selection_set = match &document.definitions[0] {
        Definition::Operation(OperationDefinition::Mutation(mutation)) => &mutation.selection_set,
        Definition::Operation(OperationDefinition::Query(query)) => &query.selection_set,
        _ => panic!("expected a query or mutation"),
    };
    let arguments = selection_set
        .items
        .iter()
        .find_map(|selection| match selection {
            Selection::Field(f) if f.name == field => Some(&f.arguments),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no field {field}"));
    match arguments.iter().find(|(name, _)| name == argument) {
        Some((_, Value::String(value))) => value.clone(),
        other => panic!("{argument} is not a string: {other:?}"),
    }
}

const COMPLEXITY: &str = "complexity { before query after reset_in_x_seconds }";

// ============================================================================
// Complexity Tests
// ============================================================================

#[test]
fn test_complexity_query_selects_budget_only() {
    assert_eq!(
        get_complexity_query().unwrap(),
        normalized(&format!("query {{ {COMPLEXITY} }}"))
    );
}

#[test]
fn test_complexity_is_prepended_when_requested() {
    let without = delete_item_query(42_u64, false).unwrap();
    let with = delete_item_query(42_u64, true).unwrap();

    assert_eq!(
        without,
        normalized("mutation { delete_item (item_id: 42) { id name } }")
    );
    assert_eq!(
        with,
        normalized(&format!(
            "mutation {{ {COMPLEXITY} delete_item (item_id: 42) {{ id name }} }}"
        ))
    );
}

// ============================================================================
// Argument Rendering Tests
// ============================================================================

#[test]
fn test_string_ids_render_as_strings() {
    let query = delete_item_query("42", false).unwrap();
    assert_eq!(
        query,
        normalized(r#"mutation { delete_item (item_id: "42") { id name } }"#)
    );
}

#[test]
fn test_strings_are_escaped() {
    let query = create_notification_query(
        1_u64,
        2_u64,
        "He said \"hi\"\nthen left",
        TargetType::Project,
        false,
    )
    .unwrap();

    assert_eq!(
        query,
        normalized(
            r#"mutation {
                create_notification (
                    user_id: 1,
                    target_id: 2,
                    text: "He said \"hi\"\nthen left",
                    target_type: Project
                ) { text }
            }"#
        )
    );
}

#[test]
fn test_strings_outside_the_bmp_reach_the_server_unchanged() {
    let body = "Great job 🎉 👍🏽";
    let query = create_update_query(body, 1_u64, None, true).unwrap();
    assert_eq!(string_argument(&query, "create_update", "body"), body);
}

#[test]
fn test_control_characters_reach_the_server_unchanged() {
    let name = "Bug \u{1f} x\ttab\u{0}";
    let query = create_item_query(name, 1_u64, None, None, false, false).unwrap();
    assert_eq!(string_argument(&query, "create_item", "item_name"), name);
}

#[test]
fn test_quotes_and_newlines_reach_the_server_unchanged() {
    let text = "He said \"hi\"\n\nthen \\left\r\n  \"\"\"";
    let query = create_notification_query(1_u64, 2_u64, text, TargetType::Post, false).unwrap();
    assert_eq!(string_argument(&query, "create_notification", "text"), text);

    let body = "\n  indented\n\nend  ";
    let query = create_update_query(body, 1_u64, None, false).unwrap();
    assert_eq!(string_argument(&query, "create_update", "body"), body);
}

#[test]
fn test_enums_render_bare() {
    let query = update_users_role_mutation(
        &[Id::from(1_u64), Id::from(2_u64)],
        BaseRoleName::ViewOnly,
        false,
    )
    .unwrap();

    assert!(query.contains("update_users_role(user_ids: [1, 2], new_role: VIEW_ONLY)"));
}

#[test]
fn test_missing_optionals_render_as_null() {
    let query = create_workspace_query("Ops", WorkspaceKind::Closed, None, false).unwrap();
    assert_eq!(
        query,
        normalized(
            r#"mutation {
                create_workspace (name: "Ops", kind: closed, description: null) {
                    id name description kind
                }
            }"#
        )
    );

    let tag = create_or_get_tag_query("urgent", None, false).unwrap();
    assert!(tag.contains(r#"create_or_get_tag(tag_name: "urgent", board_id: null)"#));
}

#[test]
fn test_json_values_are_double_encoded() {
    let config = json!({"columnId": "status"});
    let query = create_webhook_query(
        7_u64,
        "https://example.com/hook",
        WebhookEventType::ChangeSpecificColumnValue,
        Some(&config),
        false,
    )
    .unwrap();

    assert_eq!(
        query,
        normalized(
            r#"mutation {
                create_webhook (
                    board_id: 7,
                    url: "https://example.com/hook",
                    event: change_specific_column_value,
                    config: "{\"columnId\":\"status\"}"
                ) { id board_id event config }
            }"#
        )
    );
}

#[test]
fn test_simple_column_value_is_sent_as_string() {
    let query =
        change_item_column_simple_value_query(1_u64, "text", 2_u64, "hello", false, false).unwrap();
    assert!(query.contains(r#"value: "hello""#));
    assert!(query.contains("create_labels_if_missing: false"));
}

// ============================================================================
// Document Shape Tests
// ============================================================================

#[test]
fn test_webhook_queries() {
    assert_eq!(
        get_webhooks_by_board_id_query(7_u64, false).unwrap(),
        normalized("query { webhooks (board_id: 7) { id event board_id config } }")
    );
    assert_eq!(
        delete_webhook_query(3_u64, false).unwrap(),
        normalized("mutation { delete_webhook (id: 3) { id board_id } }")
    );
}

#[test]
fn test_group_and_item_mutations() {
    assert_eq!(
        archive_group_query(7_u64, "topics", false).unwrap(),
        normalized(r#"mutation { archive_group (board_id: 7, group_id: "topics") { id } }"#)
    );
    assert_eq!(
        move_item_to_group_query(1_u64, "done", false).unwrap(),
        normalized(
            r#"mutation {
                move_item_to_group (item_id: 1, group_id: "done") {
                    id name group { id title color }
                }
            }"#
        )
    );
}

#[test]
fn test_builders_are_deterministic() {
    let first = create_workspace_query("Ops", WorkspaceKind::Open, Some("Team ops"), true).unwrap();
    let second = create_workspace_query("Ops", WorkspaceKind::Open, Some("Team ops"), true).unwrap();
    assert_eq!(first, second);
    assert_eq!(graphql_parse(&first).unwrap(), first);
}

#[test]
fn test_malformed_document_is_rejected() {
    let error = graphql_parse("query { boards { id }").unwrap_err();
    assert_eq!(error.query, "query { boards { id }");
    assert!(!error.message.is_empty());
}
