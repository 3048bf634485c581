//! Board queries and mutations.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{format_enum_value, format_ids, format_param_value, graphql_parse};
use crate::graphql::queries::users::paginated_limit;
use crate::graphql::types::{
    BoardAttributes, BoardKind, BoardsOrderBy, DuplicateBoardType, Id, State, SubscriberKind,
};

/// Parameters for listing boards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardListParams {
    /// Return only these boards. When set, `limit` becomes the number of IDs.
    pub ids: Vec<Id>,
    /// Return only boards of this kind.
    pub board_kind: Option<BoardKind>,
    /// State filter (default: active).
    pub state: State,
    /// Return only boards in these workspaces.
    pub workspace_ids: Vec<Id>,
    /// Sort order.
    pub order_by: Option<BoardsOrderBy>,
    /// Maximum number of boards to return (default: 25).
    pub limit: u32,
    /// Page number, starting at 1.
    pub page: u32,
}

impl Default for BoardListParams {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            board_kind: None,
            state: State::Active,
            workspace_ids: Vec::new(),
            order_by: None,
            limit: 25,
            page: 1,
        }
    }
}

/// Parameters for creating a board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateBoardParams {
    /// The board name.
    pub board_name: String,
    /// The board kind.
    pub board_kind: BoardKind,
    /// The board description.
    pub description: Option<String>,
    /// The folder to create the board in.
    pub folder_id: Option<Id>,
    /// The workspace to create the board in.
    pub workspace_id: Option<Id>,
    /// A board template to copy the structure from.
    pub template_id: Option<Id>,
    /// Users to make owners.
    pub board_owner_ids: Vec<Id>,
    /// Teams to make owners.
    pub board_owner_team_ids: Vec<Id>,
    /// Users to subscribe.
    pub board_subscriber_ids: Vec<Id>,
    /// Teams to subscribe.
    pub board_subscriber_teams_ids: Vec<Id>,
    /// Create the board without default items.
    pub empty: bool,
}

impl CreateBoardParams {
    /// Creates parameters for a board with the given name and kind.
    #[must_use]
    pub fn new(board_name: impl Into<String>, board_kind: BoardKind) -> Self {
        Self {
            board_name: board_name.into(),
            board_kind,
            ..Self::default()
        }
    }
}

/// Parameters for duplicating a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateBoardParams {
    /// What to copy.
    pub duplicate_type: DuplicateBoardType,
    /// Name of the copy. Generated when absent.
    pub board_name: Option<String>,
    /// Workspace of the copy. Defaults to the original's.
    pub workspace_id: Option<Id>,
    /// Folder of the copy. Defaults to the original's.
    pub folder_id: Option<Id>,
    /// Copy the subscribers too.
    pub keep_subscribers: bool,
}

impl DuplicateBoardParams {
    /// Creates parameters for a duplicate of the given type.
    #[must_use]
    pub const fn new(duplicate_type: DuplicateBoardType) -> Self {
        Self {
            duplicate_type,
            board_name: None,
            workspace_id: None,
            folder_id: None,
            keep_subscribers: false,
        }
    }
}

/// Builds a query listing boards with their groups, columns and
/// subscribers.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_boards_query(
    params: &BoardListParams,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let limit = paginated_limit(&params.ids, params.limit);
    let ids = format_ids(&params.ids);
    let board_kind = format_enum_value(params.board_kind);
    let state = params.state;
    let workspace_ids = if params.workspace_ids.is_empty() {
        String::new()
    } else {
        format!("workspace_ids: {},", format_ids(&params.workspace_ids))
    };
    let order_by = format_enum_value(params.order_by);
    let page = params.page;
    graphql_parse(&format!(
        r"
        query {{{complexity}
            boards (
                ids: {ids},
                board_kind: {board_kind},
                state: {state},
                {workspace_ids}
                order_by: {order_by},
                limit: {limit},
                page: {page}
            ) {{
                id
                name
                board_kind
                state
                workspace_id
                description
                groups {{
                    id
                    title
                    color
                }}
                columns {{
                    id
                    title
                    type
                }}
                item_terminology
                subscribers {{
                    name
                    id
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation creating a board.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_board_query(
    params: &CreateBoardParams,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_name = format_param_value(&params.board_name);
    let board_kind = params.board_kind;
    let description = format_param_value(&params.description);
    let folder_id = format_param_value(&params.folder_id);
    let workspace_id = format_param_value(&params.workspace_id);
    let template_id = format_param_value(&params.template_id);
    let board_owner_ids = format_ids(&params.board_owner_ids);
    let board_owner_team_ids = format_ids(&params.board_owner_team_ids);
    let board_subscriber_ids = format_ids(&params.board_subscriber_ids);
    let board_subscriber_teams_ids = format_ids(&params.board_subscriber_teams_ids);
    let empty = params.empty;
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_board (
                board_name: {board_name},
                board_kind: {board_kind},
                description: {description},
                folder_id: {folder_id},
                workspace_id: {workspace_id},
                template_id: {template_id},
                board_owner_ids: {board_owner_ids},
                board_owner_team_ids: {board_owner_team_ids},
                board_subscriber_ids: {board_subscriber_ids},
                board_subscriber_teams_ids: {board_subscriber_teams_ids},
                empty: {empty}
            ) {{
                id
                name
                board_kind
            }}
        }}
        "
    ))
}

/// Builds a mutation duplicating a board.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn duplicate_board_query(
    board_id: impl Into<Id>,
    params: &DuplicateBoardParams,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let duplicate_type = params.duplicate_type;
    let board_name = format_param_value(&params.board_name);
    let workspace_id = format_param_value(&params.workspace_id);
    let folder_id = format_param_value(&params.folder_id);
    let keep_subscribers = params.keep_subscribers;
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            duplicate_board (
                board_id: {board_id},
                duplicate_type: {duplicate_type},
                board_name: {board_name},
                workspace_id: {workspace_id},
                folder_id: {folder_id},
                keep_subscribers: {keep_subscribers}
            ) {{
                board {{
                    id
                    name
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation changing a board's name, description or
/// communication value.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn update_board_query(
    board_id: impl Into<Id>,
    board_attribute: BoardAttributes,
    new_value: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let new_value = format_param_value(new_value);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            update_board (
                board_id: {board_id},
                board_attribute: {board_attribute},
                new_value: {new_value}
            )
        }}
        "
    ))
}

/// Builds a mutation archiving a board.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn archive_board_query(
    board_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    board_id_mutation("archive_board", &board_id.into(), with_complexity)
}

/// Builds a mutation permanently deleting a board.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_board_query(
    board_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    board_id_mutation("delete_board", &board_id.into(), with_complexity)
}

fn board_id_mutation(
    field: &str,
    board_id: &Id,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(board_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            {field} (board_id: {board_id}) {{
                id
            }}
        }}
        "
    ))
}

/// Builds a mutation adding users to a board as subscribers or owners.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn add_users_to_board_query(
    board_id: impl Into<Id>,
    user_ids: &[Id],
    kind: SubscriberKind,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let user_ids = format_ids(user_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            add_users_to_board (
                board_id: {board_id},
                user_ids: {user_ids},
                kind: {kind}
            ) {{
                id
                name
                email
            }}
        }}
        "
    ))
}

/// Builds a mutation removing users from a board's subscribers.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn remove_users_from_board_query(
    board_id: impl Into<Id>,
    user_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let user_ids = format_ids(user_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            delete_subscribers_from_board (
                board_id: {board_id},
                user_ids: {user_ids}
            ) {{
                id
                name
                email
            }}
        }}
        "
    ))
}

/// Builds a mutation adding teams to a board as subscribers or owners.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn add_teams_to_board_query(
    board_id: impl Into<Id>,
    team_ids: &[Id],
    kind: SubscriberKind,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let team_ids = format_ids(team_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            add_teams_to_board (
                board_id: {board_id},
                team_ids: {team_ids},
                kind: {kind}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}

/// Builds a mutation removing teams from a board.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_teams_from_board_query(
    board_id: impl Into<Id>,
    team_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let team_ids = format_ids(team_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            delete_teams_from_board (
                board_id: {board_id},
                team_ids: {team_ids}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}

/// Builds a query listing the views of a board, optionally filtered by
/// view IDs and view type.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_board_views_query(
    board_id: impl Into<Id>,
    ids: &[Id],
    view_type: Option<&str>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let board_id = format_param_value(&board_id.into());
    let ids = format_ids(ids);
    let view_type = format_param_value(&view_type);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            boards (ids: {board_id}) {{
                views (ids: {ids}, type: {view_type}) {{
                    type
                    settings_str
                    view_specific_data_str
                    name
                    id
                }}
            }}
        }}
        "
    ))
}
