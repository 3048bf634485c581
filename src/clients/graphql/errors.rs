//! GraphQL-specific error types.
//!
//! - [`GraphqlError::Http`]: transport failures
//! - [`GraphqlError::Api`]: errors reported by monday.com in the response body
//! - [`GraphqlError::Syntax`]: a query that does not parse as GraphQL
//! - [`GraphqlError::FileRead`]: a file to upload could not be read
//!
//! monday.com reports failures in the body, often with HTTP 200, using either
//! a GraphQL `errors` array or top-level `error_message`/`error_code` fields.
//! Both shapes are turned into a [`MondayApiError`].

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::clients::HttpError;

/// Error returned when a document is not valid GraphQL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("GraphQL syntax error: {message}")]
pub struct QuerySyntaxError {
    /// The parser's description of the problem.
    pub message: String,
    /// The document that failed to parse.
    pub query: String,
}

/// Well-known monday.com error codes.
///
/// Codes come from the top-level `error_code` field or from
/// `errors[0].extensions.code`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MondayErrorKind {
    /// The query exceeded the complexity budget.
    Complexity,
    /// Too many requests in the current window.
    RateLimitExceeded,
    /// The account reached its daily call limit.
    DailyLimitExceeded,
    /// Too many concurrent requests.
    MaxConcurrencyExceeded,
    /// The token is missing or lacks the required permission.
    Unauthorized,
    /// A referenced resource does not exist.
    ResourceNotFound,
    /// An argument was rejected.
    InvalidArgument,
    /// An unknown board ID.
    InvalidBoardId,
    /// An unknown item ID.
    InvalidItemId,
    /// An unknown column ID.
    InvalidColumnId,
    /// An unknown user ID.
    InvalidUserId,
    /// The requested API version does not exist.
    InvalidVersion,
    /// A column value has the wrong shape.
    ColumnValue,
    /// A JSON argument could not be parsed.
    JsonParse,
    /// The board item limit was reached.
    ItemsLimitation,
    /// An item name is longer than allowed.
    ItemNameTooLong,
    /// The board could not be created.
    CreateBoard,
    /// The API is temporarily blocked for the account.
    ApiTemporarilyBlocked,
    /// A server-side failure.
    InternalServerError,
    /// The query failed GraphQL validation.
    QueryValidation,
    /// Any other code, kept verbatim.
    Other(String),
    /// No code was reported.
    Unknown,
}

impl MondayErrorKind {
    /// Maps an error code reported by monday.com to a kind.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "ComplexityException" | "COMPLEXITY_BUDGET_EXHAUSTED" => Self::Complexity,
            "RateLimitExceeded" | "RATE_LIMIT_EXCEEDED" => Self::RateLimitExceeded,
            "DAILY_LIMIT_EXCEEDED" => Self::DailyLimitExceeded,
            "maxConcurrencyExceeded" => Self::MaxConcurrencyExceeded,
            "UserUnauthorizedException" | "USER_UNAUTHORIZED" | "Unauthorized" => {
                Self::Unauthorized
            }
            "ResourceNotFoundException" => Self::ResourceNotFound,
            "InvalidArgumentException" | "argumentLiteralsIncompatible" => Self::InvalidArgument,
            "InvalidBoardIdException" => Self::InvalidBoardId,
            "InvalidItemIdException" => Self::InvalidItemId,
            "InvalidColumnIdException" => Self::InvalidColumnId,
            "InvalidUserIdException" => Self::InvalidUserId,
            "InvalidVersionException" => Self::InvalidVersion,
            "ColumnValueException" | "CorrectedValueException" => Self::ColumnValue,
            "JsonParseException" => Self::JsonParse,
            "ItemsLimitationException" => Self::ItemsLimitation,
            "ItemNameTooLongException" => Self::ItemNameTooLong,
            "CreateBoardException" => Self::CreateBoard,
            "API_TEMPORARILY_BLOCKED" => Self::ApiTemporarilyBlocked,
            "INTERNAL_SERVER_ERROR" | "InternalServerError" => Self::InternalServerError,
            "GRAPHQL_VALIDATION_FAILED" | "undefinedField" | "missingRequiredArguments" => {
                Self::QueryValidation
            }
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns `true` for kinds that succeed when retried later.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Complexity
                | Self::RateLimitExceeded
                | Self::MaxConcurrencyExceeded
                | Self::InternalServerError
        )
    }
}

/// An error reported by monday.com in a response body.
///
/// `message` is a readable rendering of every reported error: each GraphQL
/// error with its location and the surrounding query lines, then any
/// top-level `error_message` with its status, code and data.
#[derive(Clone, Debug, PartialEq)]
pub struct MondayApiError {
    /// The classified error code.
    pub kind: MondayErrorKind,
    /// The formatted error message.
    pub message: String,
    /// The raw error code, if any.
    pub error_code: Option<String>,
    /// The status code from the body, or the HTTP status.
    pub status_code: Option<u16>,
    /// The `error_data` object, if any.
    pub error_data: Option<Value>,
    /// The `extensions` of the first GraphQL error.
    pub extensions: Option<Value>,
    /// The `path` of the first GraphQL error.
    pub path: Option<Value>,
    /// Every entry of the `errors` array.
    pub errors: Vec<Value>,
    /// The `account_id` the request ran against.
    pub account_id: Option<u64>,
}

impl std::error::Error for MondayApiError {}

impl fmt::Display for MondayApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl MondayApiError {
    /// Builds an error from a response body, or returns `None` when the body
    /// reports no error.
    ///
    /// `query` is the document that was sent; it is used to quote the lines
    /// around each reported location. `http_status` is used when the body
    /// carries no `status_code`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monday_async::clients::graphql::{MondayApiError, MondayErrorKind};
    /// use serde_json::json;
    ///
    /// let body = json!({
    ///     "error_code": "ComplexityException",
    ///     "error_message": "Complexity budget exhausted",
    ///     "status_code": 429
    /// });
    ///
    /// let error = MondayApiError::from_body(&body, "query { me { id } }", Some(429)).unwrap();
    /// assert_eq!(error.kind, MondayErrorKind::Complexity);
    /// assert!(error.message.contains("Complexity budget exhausted"));
    /// ```
    #[must_use]
    pub fn from_body(body: &Value, query: &str, http_status: Option<u16>) -> Option<Self> {
        let object = body.as_object()?;

        let errors: Vec<Value> = object
            .get("errors")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let error_message = object.get("error_message").map(value_to_text);
        let error_code = object.get("error_code").map(value_to_text);

        if errors.is_empty() && error_message.is_none() && error_code.is_none() {
            return None;
        }

        let first = errors.first();
        let extensions = first.and_then(|e| e.get("extensions")).cloned();
        let path = first.and_then(|e| e.get("path")).cloned();
        let error_data = object.get("error_data").cloned();

        let body_status = object
            .get("status_code")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok());
        let status_code = body_status.or(http_status);

        let kind = error_code
            .as_deref()
            .or_else(|| {
                extensions
                    .as_ref()
                    .and_then(|ext| ext.get("code"))
                    .and_then(Value::as_str)
            })
            .map_or(MondayErrorKind::Unknown, MondayErrorKind::from_code);

        let message = format_message(
            &errors,
            error_message.as_deref(),
            body_status,
            error_code.as_deref(),
            error_data.as_ref(),
            query,
        );

        Some(Self {
            kind,
            message,
            error_code,
            status_code,
            error_data,
            extensions,
            path,
            errors,
            account_id: object.get("account_id").and_then(Value::as_u64),
        })
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_message(
    errors: &[Value],
    error_message: Option<&str>,
    status_code: Option<u16>,
    error_code: Option<&str>,
    error_data: Option<&Value>,
    query: &str,
) -> String {
    let lines: Vec<&str> = query.split('\n').collect();
    let mut out = String::new();

    for error in errors {
        let text = error.get("message").map_or_else(
            || error.to_string(),
            |m| m.as_str().map_or_else(|| m.to_string(), str::to_string),
        );
        out.push('\n');
        out.push_str(&text);

        let locations = error
            .get("locations")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice);
        for location in locations {
            let line = location.get("line").and_then(Value::as_u64).unwrap_or(0);
            let column = location.get("column").and_then(Value::as_u64).unwrap_or(0);
            out.push_str(&format!("\nLocation: Line {line}, Column {column}"));

            let first = line.saturating_sub(1).max(1);
            for n in first..=line.saturating_add(1) {
                let Ok(index) = usize::try_from(n) else {
                    break;
                };
                if let Some(source) = lines.get(index - 1) {
                    out.push_str(&format!("\n{n}) {source}"));
                }
            }
        }

        if let Some(stack) = error.get("stack").and_then(Value::as_str) {
            out.push_str(&format!("\nStack: {stack}"));
        }
    }

    if error_message.is_some() || (errors.is_empty() && error_code.is_some()) {
        out.push('\n');
        out.push_str(error_message.or(error_code).unwrap_or_default());
        if let Some(status) = status_code {
            out.push_str(&format!("\n  - Status Code: {status}"));
        }
        if let Some(code) = error_code {
            out.push_str(&format!("\n  - Error Code: {code}"));
        }
        if let Some(data) = error_data {
            out.push_str(&format!("\n  - Error Data: {data}"));
        }
        out.push('\n');
    }

    out
}

/// Error type for GraphQL API operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error (network failure, non-2xx status without an API
    /// error body, retry exhaustion).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// monday.com reported an error in the response body.
    #[error(transparent)]
    Api(#[from] MondayApiError),

    /// The query is not valid GraphQL.
    #[error(transparent)]
    Syntax(#[from] QuerySyntaxError),

    /// A file to upload could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    FileRead {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl GraphqlError {
    /// Returns the monday.com error, if this is an API error.
    #[must_use]
    pub const fn api_error(&self) -> Option<&MondayApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}
