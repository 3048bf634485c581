//! The [`MondayClient`] entry point.

use std::fmt;
use std::sync::Arc;

use crate::clients::{build_http_client, GraphqlClient, HttpError, SDK_VERSION};
use crate::config::MondayConfig;
use crate::resources::{
    AccountResource, ApiResource, BoardResource, ColumnResource, ComplexityResource,
    CustomResource, FolderResource, GroupResource, ItemResource, NotificationResource,
    TagResource, UpdateResource, UsersResource, WebhooksResource, WorkspaceResource,
};

/// Async client for the monday.com API.
///
/// Every resource shares one [`GraphqlClient`] and therefore one
/// `reqwest::Client` connection pool. The client holds no mutable state;
/// clone it or share it behind an `Arc` across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use monday_async::{ApiToken, MondayClient, MondayConfig};
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new(std::env::var("MONDAY_TOKEN")?)?)
///     .build()?;
/// let client = MondayClient::new(&config)?;
///
/// let me = client.users.get_me(false).await?;
/// println!("{}", me.data()["me"]["name"]);
/// ```
#[derive(Clone, Debug)]
pub struct MondayClient {
    graphql: Arc<GraphqlClient>,
    /// Arbitrary documents.
    pub custom: CustomResource,
    /// API versions.
    pub api: ApiResource,
    /// The account.
    pub account: AccountResource,
    /// The complexity budget.
    pub complexity: ComplexityResource,
    /// Webhooks.
    pub webhooks: WebhooksResource,
    /// Notifications.
    pub notifications: NotificationResource,
    /// Users and teams.
    pub users: UsersResource,
    /// Workspaces.
    pub workspaces: WorkspaceResource,
    /// Folders.
    pub folders: FolderResource,
    /// Boards.
    pub boards: BoardResource,
    /// Tags.
    pub tags: TagResource,
    /// Columns.
    pub columns: ColumnResource,
    /// Groups.
    pub groups: GroupResource,
    /// Items and subitems.
    pub items: ItemResource,
    /// Updates.
    pub updates: UpdateResource,
}

// Verify MondayClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MondayClient>();
};

impl MondayClient {
    /// Creates a client with its own `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &MondayConfig) -> Result<Self, HttpError> {
        Ok(Self::with_http_client(config, build_http_client()?))
    }

    /// Creates a client on a caller-owned `reqwest::Client`.
    ///
    /// The handle is only cloned, so its connection pool stays shared with
    /// the caller.
    #[must_use]
    pub fn with_http_client(config: &MondayConfig, http: reqwest::Client) -> Self {
        let graphql = Arc::new(GraphqlClient::new(config, http));

        tracing::debug!(
            api_version = %config.api_version(),
            endpoint = %config.endpoint(),
            "Created monday.com client"
        );

        Self {
            custom: CustomResource::new(Arc::clone(&graphql)),
            api: ApiResource::new(Arc::clone(&graphql)),
            account: AccountResource::new(Arc::clone(&graphql)),
            complexity: ComplexityResource::new(Arc::clone(&graphql)),
            webhooks: WebhooksResource::new(Arc::clone(&graphql)),
            notifications: NotificationResource::new(Arc::clone(&graphql)),
            users: UsersResource::new(Arc::clone(&graphql)),
            workspaces: WorkspaceResource::new(Arc::clone(&graphql)),
            folders: FolderResource::new(Arc::clone(&graphql)),
            boards: BoardResource::new(Arc::clone(&graphql)),
            tags: TagResource::new(Arc::clone(&graphql)),
            columns: ColumnResource::new(Arc::clone(&graphql)),
            groups: GroupResource::new(Arc::clone(&graphql)),
            items: ItemResource::new(Arc::clone(&graphql)),
            updates: UpdateResource::new(Arc::clone(&graphql)),
            graphql,
        }
    }

    /// Returns the GraphQL client shared by every resource.
    #[must_use]
    pub fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }
}

impl fmt::Display for MondayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MondayClient {SDK_VERSION}")
    }
}
