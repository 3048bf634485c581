//! Per-resource facades over the shared [`GraphqlClient`].
//!
//! Each resource builds its documents with the matching builder in
//! [`crate::graphql::queries`] and sends them through one shared client.
//! Methods return the whole [`GraphqlResponse`](crate::clients::GraphqlResponse);
//! use [`data`](crate::clients::GraphqlResponse::data) for the result.
//!
//! Resources are cheap to clone and are normally reached through the
//! fields of [`MondayClient`](crate::MondayClient).

mod account;
mod api;
mod boards;
mod columns;
mod complexity;
mod custom;
mod folders;
mod groups;
mod items;
mod notifications;
mod tags;
mod updates;
mod users;
mod webhooks;
mod workspaces;

pub use account::AccountResource;
pub use api::ApiResource;
pub use boards::BoardResource;
pub use columns::ColumnResource;
pub use complexity::ComplexityResource;
pub use custom::CustomResource;
pub use folders::FolderResource;
pub use groups::GroupResource;
pub use items::ItemResource;
pub use notifications::NotificationResource;
pub use tags::TagResource;
pub use updates::UpdateResource;
pub use users::UsersResource;
pub use webhooks::WebhooksResource;
pub use workspaces::WorkspaceResource;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::clients::GraphqlClient;
    use crate::config::{ApiToken, MondayConfig};

    pub fn client() -> Arc<GraphqlClient> {
        let config = MondayConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap();
        Arc::new(GraphqlClient::new(&config, reqwest::Client::new()))
    }
}
