use std::sync::Arc;

use serde_json::Value;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{
    create_webhook_query, delete_webhook_query, get_webhooks_by_board_id_query,
};
use crate::graphql::types::{Id, WebhookEventType};

/// Board webhooks.
#[derive(Clone, Debug)]
pub struct WebhooksResource {
    client: Arc<GraphqlClient>,
}

impl WebhooksResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Lists the webhooks of a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_webhooks_by_board_id(
        &self,
        board_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_webhooks_by_board_id_query(board_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Subscribes `url` to an event on a board.
    ///
    /// `config` narrows some events, for example
    /// `{"columnId": "status", "columnValue": {"index": 1}}`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_webhook(
        &self,
        board_id: impl Into<Id>,
        url: &str,
        event: WebhookEventType,
        config: Option<&Value>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = create_webhook_query(board_id, url, event, config, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_webhook(
        &self,
        webhook_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_webhook_query(webhook_id, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
