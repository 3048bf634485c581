//! Folder queries and mutations.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{format_ids, format_param_value, gather_params, graphql_parse};
use crate::graphql::queries::users::paginated_limit;
use crate::graphql::types::{FolderColor, Id};

/// Parameters for listing folders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderListParams {
    /// Return only these folders. When set, `limit` becomes the number of IDs.
    pub ids: Vec<Id>,
    /// Return only folders in these workspaces.
    pub workspace_ids: Vec<Id>,
    /// Maximum number of folders to return (default: 25, maximum: 100).
    pub limit: u32,
    /// Page number, starting at 1.
    pub page: u32,
}

impl Default for FolderListParams {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            workspace_ids: Vec::new(),
            limit: 25,
            page: 1,
        }
    }
}

/// Builds a query listing folders.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_folders_query(
    params: &FolderListParams,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let limit = paginated_limit(&params.ids, params.limit);
    let ids = format_ids(&params.ids);
    let workspace_ids = format_ids(&params.workspace_ids);
    let page = params.page;
    graphql_parse(&format!(
        r"
        query {{{complexity}
            folders (
                ids: {ids},
                workspace_ids: {workspace_ids},
                limit: {limit},
                page: {page}
            ) {{
                id
                name
                color
                parent {{
                    id
                    name
                }}
                sub_folders {{
                    id
                    name
                }}
                workspace {{
                    id
                    name
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation creating a folder in a workspace.
///
/// A missing color is sent as `NULL`.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_folder_query(
    workspace_id: impl Into<Id>,
    name: &str,
    color: Option<FolderColor>,
    parent_folder_id: Option<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let workspace_id = format_param_value(&workspace_id.into());
    let name = format_param_value(name);
    let color = color.unwrap_or_default();
    let parent_folder_id = format_param_value(&parent_folder_id);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_folder (
                workspace_id: {workspace_id},
                name: {name},
                color: {color},
                parent_folder_id: {parent_folder_id}
            ) {{
                id
                name
                color
            }}
        }}
        "
    ))
}

/// Builds a mutation updating a folder. Only the given fields change.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn update_folder_query(
    folder_id: impl Into<Id>,
    name: Option<&str>,
    color: Option<FolderColor>,
    parent_folder_id: Option<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let folder_id = format_param_value(&folder_id.into());
    let updates = gather_params(&[
        ("name", name.map(format_param_value)),
        ("color", color.map(|c| c.to_string())),
        ("parent_folder_id", parent_folder_id.as_ref().map(format_param_value)),
    ]);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            update_folder (
                folder_id: {folder_id},
                {updates}
            ) {{
                id
                name
                color
            }}
        }}
        "
    ))
}

/// Builds a mutation deleting a folder.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_folder_query(
    folder_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let folder_id = format_param_value(&folder_id.into());
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            delete_folder (folder_id: {folder_id}) {{
                id
            }}
        }}
        "
    ))
}
