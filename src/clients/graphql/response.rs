//! GraphQL response wrapper.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::HttpResponse;

/// The complexity block returned when a query selects `complexity`.
///
/// All values are in complexity points.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Complexity {
    /// Budget before the query ran.
    pub before: u64,
    /// Cost of the query.
    pub query: u64,
    /// Budget after the query ran.
    pub after: u64,
    /// Seconds until the budget resets.
    pub reset_in_x_seconds: u64,
}

/// A successful response from the monday.com GraphQL API.
///
/// Only responses without API errors are wrapped; errors in the body are
/// returned as [`GraphqlError::Api`](crate::clients::graphql::GraphqlError::Api).
///
/// # Example
///
/// ```rust
/// use monday_async::clients::graphql::GraphqlResponse;
/// use serde_json::json;
///
/// let response = GraphqlResponse::from_body(json!({
///     "data": {
///         "complexity": {"before": 5000000, "query": 10, "after": 4999990, "reset_in_x_seconds": 60},
///         "me": {"id": "1"}
///     },
///     "account_id": 42
/// }));
///
/// assert_eq!(response.data()["me"]["id"], "1");
/// assert_eq!(response.complexity().unwrap().query, 10);
/// assert_eq!(response.account_id(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct GraphqlResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased.
    pub headers: HashMap<String, Vec<String>>,
    /// The full response body.
    pub body: Value,
}

impl From<HttpResponse> for GraphqlResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            code: response.code,
            headers: response.headers,
            body: response.body,
        }
    }
}

impl GraphqlResponse {
    /// Wraps a body as a 200 response without headers.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        Self {
            code: 200,
            headers: HashMap::new(),
            body,
        }
    }

    /// Returns the `data` object, or `Value::Null` when absent.
    #[must_use]
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&Value::Null)
    }

    /// Consumes the response and returns the `data` object.
    #[must_use]
    pub fn into_data(self) -> Value {
        match self.body {
            Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }

    /// Deserializes the `data` object into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if `data` does not match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(self.data())
    }

    /// Returns the parsed complexity block, if the query selected one.
    #[must_use]
    pub fn complexity(&self) -> Option<Complexity> {
        self.data()
            .get("complexity")
            .and_then(|value| Complexity::deserialize(value).ok())
    }

    /// Returns the account the request ran against.
    #[must_use]
    pub fn account_id(&self) -> Option<u64> {
        self.body.get("account_id").and_then(Value::as_u64)
    }

    /// Returns the `extensions` object, if any.
    #[must_use]
    pub fn extensions(&self) -> Option<&Value> {
        self.body.get("extensions")
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_is_returned_unchanged() {
        let data = json!({"boards": [{"id": "41234", "name": "New Board"}]});
        let response = GraphqlResponse::from_body(json!({"data": data.clone(), "account_id": 1}));

        assert_eq!(response.data(), &data);
        assert_eq!(response.into_data(), data);
    }

    #[test]
    fn test_missing_data_is_null() {
        let response = GraphqlResponse::from_body(json!({}));
        assert!(response.data().is_null());
        assert!(response.complexity().is_none());
        assert!(response.account_id().is_none());
        assert!(GraphqlResponse::from_body(json!([])).into_data().is_null());
    }

    #[test]
    fn test_data_as_deserializes() {
        #[derive(Deserialize)]
        struct Me {
            id: String,
            name: String,
        }
        #[derive(Deserialize)]
        struct Data {
            me: Me,
        }

        let response =
            GraphqlResponse::from_body(json!({"data": {"me": {"id": "7", "name": "Ada"}}}));
        let data: Data = response.data_as().unwrap();
        assert_eq!(data.me.id, "7");
        assert_eq!(data.me.name, "Ada");
    }

    #[test]
    fn test_complexity_parsing() {
        let response = GraphqlResponse::from_body(json!({
            "data": {
                "complexity": {
                    "before": 10_000_000,
                    "query": 1002,
                    "after": 9_998_998,
                    "reset_in_x_seconds": 40
                }
            }
        }));

        assert_eq!(
            response.complexity(),
            Some(Complexity {
                before: 10_000_000,
                query: 1002,
                after: 9_998_998,
                reset_in_x_seconds: 40,
            })
        );
    }

    #[test]
    fn test_from_http_response() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        let http = HttpResponse::new(200, headers, json!({"data": {}, "extensions": {"a": 1}}));

        let response = GraphqlResponse::from(http);
        assert_eq!(response.code, 200);
        assert_eq!(response.request_id(), Some("req-9"));
        assert_eq!(response.extensions(), Some(&json!({"a": 1})));
    }
}
