//! GraphQL document builders for every monday.com resource.
//!
//! Each builder renders its arguments into a query or mutation, parses the
//! result and returns it in canonical form, so a malformed document is
//! reported as a [`QuerySyntaxError`](crate::clients::graphql::QuerySyntaxError)
//! before anything is sent.
//!
//! Every builder takes a trailing `with_complexity` flag that adds the
//! `complexity` selection to the document.
//!
//! # Example
//!
//! ```rust
//! use monday_async::graphql::queries::{get_boards_query, BoardListParams};
//!
//! let params = BoardListParams {
//!     ids: vec![123_u64.into()],
//!     ..Default::default()
//! };
//! let query = get_boards_query(&params, false).unwrap();
//! assert!(query.contains("boards(ids: [123]"));
//! ```

mod account;
mod api;
mod boards;
mod columns;
mod complexity;
mod folders;
mod groups;
mod items;
mod notifications;
mod tags;
mod teams;
mod updates;
mod users;
mod webhooks;
mod workspaces;

pub use account::get_account_query;
pub use api::{get_all_api_versions_query, get_current_api_version_query};
pub use boards::{
    add_teams_to_board_query, add_users_to_board_query, archive_board_query, create_board_query,
    delete_board_query, delete_teams_from_board_query, duplicate_board_query,
    get_board_views_query, get_boards_query, remove_users_from_board_query, update_board_query,
    BoardListParams, CreateBoardParams, DuplicateBoardParams,
};
pub use columns::{
    change_column_description_query, change_column_title_query, create_column_query,
    delete_column_query, get_columns_by_board_query, CreateColumnParams,
};
pub use complexity::get_complexity_query;
pub use folders::{
    create_folder_query, delete_folder_query, get_folders_query, update_folder_query,
    FolderListParams,
};
pub use groups::{
    archive_group_query, create_group_query, delete_group_query, duplicate_group_query,
    get_groups_by_board_query, update_group_query,
};
pub use items::{
    archive_item_query, change_item_column_json_value_query,
    change_item_column_simple_value_query, change_multiple_item_column_values_query,
    clear_item_updates_query, create_item_query, create_subitem_query, delete_item_query,
    duplicate_item_query, get_item_updates_query, get_items_by_board_query,
    get_items_by_column_value_query, get_items_by_group_query, get_items_by_id_query,
    get_items_by_multiple_column_values_query, get_subitems_by_parent_item_query,
    move_item_to_group_query, next_items_page_query, upload_file_to_column_query, ItemFields,
    ItemListParams, MAX_ITEMS_PAGE_LIMIT,
};
pub use notifications::create_notification_query;
pub use tags::{create_or_get_tag_query, get_tags_by_board_query, get_tags_query};
pub use teams::{add_users_to_team_query, get_teams_query, remove_users_from_team_query};
pub use updates::{
    add_file_to_update_query, create_update_query, delete_update_query, edit_update_query,
    get_updates_query, like_update_query, pin_update_query, unlike_update_query,
    unpin_update_query,
};
pub use users::{
    activate_users_mutation, deactivate_users_mutation, get_me_query, get_users_by_email_query,
    get_users_query, invite_users_mutation, update_users_email_domain_mutation,
    update_users_role_mutation, UserListParams,
};
pub use webhooks::{create_webhook_query, delete_webhook_query, get_webhooks_by_board_id_query};
pub use workspaces::{
    add_teams_to_workspace_query, add_users_to_workspace_query, create_workspace_query,
    delete_teams_from_workspace_query, delete_users_from_workspace_query, delete_workspace_query,
    get_workspaces_query, update_workspace_query, WorkspaceListParams,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::types::{ColumnType, GroupColors, Id, PositionRelative};
    use serde_json::json;

    #[test]
    fn test_complexity_flag_adds_selection() {
        let without = get_tags_query(&[], false).unwrap();
        let with = get_tags_query(&[], true).unwrap();
        assert!(!without.contains("complexity"));
        assert!(with.contains("reset_in_x_seconds"));
    }

    #[test]
    fn test_create_column_only_sends_custom_id_when_given() {
        let params = CreateColumnParams::new("Status", ColumnType::Status);
        let query = create_column_query(1_u64, &params, false).unwrap();
        assert!(query.contains("column_type: status"));
        assert!(!query.contains(" id: "));

        let params = CreateColumnParams {
            column_id: Some("my_status".to_string()),
            defaults: Some(json!({"labels": {"1": "Done"}})),
            ..CreateColumnParams::new("Status", ColumnType::Status)
        };
        let query = create_column_query(1_u64, &params, false).unwrap();
        assert!(query.contains(r#"id: "my_status""#));
        assert!(query.contains(r#"defaults: "{\"labels\":{\"1\":\"Done\"}}""#));
    }

    #[test]
    fn test_create_group_quotes_color_and_leaves_position_bare() {
        let query = create_group_query(
            1_u64,
            "Backlog",
            Some(GroupColors::DarkGreen),
            Some("topics"),
            Some(PositionRelative::BeforeAt),
            false,
        )
        .unwrap();
        assert!(query.contains(r##"group_color: "#037f4c""##));
        assert!(query.contains("position_relative_method: before_at"));
    }

    #[test]
    fn test_columns_by_board_renders_types_bare() {
        let query = get_columns_by_board_query(
            Id::from("42"),
            &["status"],
            &[ColumnType::Status, ColumnType::Date],
            false,
        )
        .unwrap();
        assert!(query.contains(r#"boards(ids: "42")"#));
        assert!(query.contains(r#"columns(ids: ["status"], types: [status, date])"#));
    }

    #[test]
    fn test_create_or_get_tag_without_board() {
        let query = create_or_get_tag_query("urgent", None, false).unwrap();
        assert!(query.contains(r#"create_or_get_tag(tag_name: "urgent", board_id: null)"#));
    }
}
