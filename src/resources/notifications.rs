use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::create_notification_query;
use crate::graphql::types::{Id, TargetType};

/// Bell notifications.
#[derive(Clone, Debug)]
pub struct NotificationResource {
    client: Arc<GraphqlClient>,
}

impl NotificationResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Sends a notification to a user about an item or a board (project)
    /// or an update (post).
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_notification(
        &self,
        user_id: impl Into<Id>,
        target_id: impl Into<Id>,
        text: &str,
        target_type: TargetType,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query =
            create_notification_query(user_id, target_id, text, target_type, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
