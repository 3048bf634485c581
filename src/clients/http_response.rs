//! HTTP response types.

use std::collections::HashMap;

/// An HTTP response from the monday.com API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying.
    ///
    /// Read from the `Retry-After` header, falling back to a
    /// `retry_in_seconds` value in the body or in the first error's
    /// `extensions`.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, extracting the retry delay.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .or_else(|| Self::retry_in_seconds(&body));

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    fn retry_in_seconds(body: &serde_json::Value) -> Option<f64> {
        body.get("retry_in_seconds")
            .or_else(|| body.pointer("/errors/0/extensions/retry_in_seconds"))
            .and_then(serde_json::Value::as_f64)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns `true` if the body reports an API error.
    ///
    /// monday.com reports failures through `errors`, `error_message` or
    /// `error_code`, sometimes with a 200 status.
    #[must_use]
    pub fn has_api_errors(&self) -> bool {
        self.body.as_object().map_or(false, |object| {
            object.contains_key("errors")
                || object.contains_key("error_message")
                || object.contains_key("error_code")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "Expected is_ok() for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 403, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_retry_after_header_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_retry_in_seconds_from_body() {
        let response = HttpResponse::new(429, HashMap::new(), json!({"retry_in_seconds": 7}));
        assert_eq!(response.retry_request_after, Some(7.0));

        let body = json!({
            "errors": [{
                "message": "Complexity budget exhausted",
                "extensions": {"code": "ComplexityException", "retry_in_seconds": 12}
            }]
        });
        let response = HttpResponse::new(429, HashMap::new(), body);
        assert_eq!(response.retry_request_after, Some(12.0));
    }

    #[test]
    fn test_retry_after_header_wins_over_body() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["1".to_string()]);
        let response = HttpResponse::new(429, headers, json!({"retry_in_seconds": 30}));
        assert_eq!(response.retry_request_after, Some(1.0));
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }

    #[test]
    fn test_has_api_errors() {
        let ok = HttpResponse::new(200, HashMap::new(), json!({"data": {"me": {"id": "1"}}}));
        assert!(!ok.has_api_errors());

        let errors = HttpResponse::new(200, HashMap::new(), json!({"errors": []}));
        assert!(errors.has_api_errors());

        let code = HttpResponse::new(200, HashMap::new(), json!({"error_code": "X"}));
        assert!(code.has_api_errors());

        let not_object = HttpResponse::new(200, HashMap::new(), json!([1, 2]));
        assert!(!not_object.has_api_errors());
    }
}
