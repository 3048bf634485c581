//! Value formatting and parsing helpers shared by the query builders.
//!
//! Arguments are rendered as GraphQL literals: scalars and lists through
//! their JSON encoding (which GraphQL accepts for strings, numbers,
//! booleans, `null` and lists), enum values bare.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::types::Id;

/// Renders a value as a GraphQL literal via its JSON encoding.
///
/// `None` renders as `null`.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::helpers::format_param_value;
///
/// assert_eq!(format_param_value("Done"), r#""Done""#);
/// assert_eq!(format_param_value(&Some(5)), "5");
/// assert_eq!(format_param_value(&None::<String>), "null");
/// assert_eq!(format_param_value(&[1, 2]), "[1,2]");
/// ```
#[must_use]
pub fn format_param_value<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Renders a list of IDs, or `null` when the list is empty.
#[must_use]
pub fn format_ids(ids: &[Id]) -> String {
    if ids.is_empty() {
        "null".to_string()
    } else {
        format_param_value(ids)
    }
}

/// Renders a list of enum values bare, or `null` when the list is empty.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::helpers::format_enum_values;
/// use monday_async::graphql::types::ColumnType;
///
/// assert_eq!(format_enum_values(&[ColumnType::Status, ColumnType::Text]), "[status, text]");
/// assert_eq!(format_enum_values::<ColumnType>(&[]), "null");
/// ```
#[must_use]
pub fn format_enum_values<T: Display>(values: &[T]) -> String {
    if values.is_empty() {
        return "null".to_string();
    }
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

/// Renders an optional enum value bare, or `null`.
#[must_use]
pub fn format_enum_value<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Double-encodes a value as JSON.
///
/// monday.com takes column values, column defaults and webhook configs as
/// a JSON document passed inside a GraphQL string. The inner encoding is
/// compact and keeps non-ASCII characters as they are. `None` renders as
/// `null`, not `"null"`.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::helpers::monday_json_stringify;
/// use serde_json::json;
///
/// assert_eq!(
///     monday_json_stringify(Some(&json!({"label": "Done"}))),
///     r#""{\"label\":\"Done\"}""#
/// );
/// assert_eq!(monday_json_stringify::<serde_json::Value>(None), "null");
/// ```
#[must_use]
pub fn monday_json_stringify<T: Serialize + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(value) => format_param_value(&format_param_value(value)),
        None => "null".to_string(),
    }
}

/// Renders key/value pairs as a GraphQL input object with JSON-encoded
/// values.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::helpers::format_dict_value;
/// use serde_json::json;
///
/// let rendered = format_dict_value(&[("column_id", json!("status")), ("column_values", json!(["Done"]))]);
/// assert_eq!(rendered, r#"{column_id: "status", column_values: ["Done"]}"#);
/// assert_eq!(format_dict_value(&[]), "{}");
/// ```
#[must_use]
pub fn format_dict_value(pairs: &[(&str, Value)]) -> String {
    let fields: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}: {}", format_param_value(value)))
        .collect();
    format!("{{{}}}", fields.join(", "))
}

/// Joins already rendered arguments as `key: value, ...`, skipping `None`.
///
/// Used for partial updates where only the fields being changed are sent.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::helpers::gather_params;
///
/// let params = gather_params(&[
///     ("name", Some(r#""New name""#.to_string())),
///     ("color", None),
///     ("kind", Some("open".to_string())),
/// ]);
/// assert_eq!(params, r#"name: "New name", kind: open"#);
/// ```
#[must_use]
pub fn gather_params(pairs: &[(&str, Option<String>)]) -> String {
    pairs
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}: {v}")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a GraphQL document and prints it back in canonical form.
///
/// Two documents that differ only in whitespace, commas or indentation
/// normalize to the same string. String literals are kept exactly as
/// written, escapes included.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if `query` is not valid GraphQL.
///
/// # Example
///
/// ```rust
/// use monday_async::graphql::helpers::graphql_parse;
///
/// let a = graphql_parse("query { me { id, name } }").unwrap();
/// let b = graphql_parse("query {\n  me {\n    id\n    name\n  }\n}").unwrap();
/// assert_eq!(a, b);
///
/// let update = graphql_parse(r#"mutation { create_update (item_id: 1, body: "Done 🎉\n") { id } }"#).unwrap();
/// assert!(update.contains(r#"body: "Done 🎉\n""#));
///
/// assert!(graphql_parse("query { me { id }").is_err());
/// ```
pub fn graphql_parse(query: &str) -> Result<String, QuerySyntaxError> {
    let syntax_error = |e: graphql_parser::query::ParseError| QuerySyntaxError {
        message: e.to_string(),
        query: query.to_string(),
    };

    graphql_parser::parse_query::<&str>(query).map_err(syntax_error)?;

    // The printer re-escapes strings lossily, so it only sees placeholders.
    let (masked, literals) = mask_string_literals(query);
    let document = graphql_parser::parse_query::<&str>(&masked).map_err(syntax_error)?;
    Ok(unmask_string_literals(&document.to_string(), &literals))
}

const LITERAL_MARKER: &str = "\"__monday_async_literal_";

/// Replaces every string literal outside comments with a numbered
/// placeholder string, returning the literals in order.
fn mask_string_literals(query: &str) -> (String, Vec<&str>) {
    let mut masked = String::with_capacity(query.len());
    let mut literals = Vec::new();
    let mut rest = query;

    while let Some(pos) = rest.find(['"', '#']) {
        masked.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with('#') {
            let len = tail.find('\n').unwrap_or(tail.len());
            masked.push_str(&tail[..len]);
            rest = &tail[len..];
        } else {
            let len = string_literal_len(tail);
            masked.push_str(&format!("{LITERAL_MARKER}{}__\"", literals.len()));
            literals.push(&tail[..len]);
            rest = &tail[len..];
        }
    }
    masked.push_str(rest);

    (masked, literals)
}

/// Byte length of the string or block string literal `tail` starts with.
fn string_literal_len(tail: &str) -> usize {
    const BLOCK_QUOTE: &str = "\"\"\"";

    if let Some(body) = tail.strip_prefix(BLOCK_QUOTE) {
        let mut from = 0;
        while let Some(i) = body[from..].find(BLOCK_QUOTE) {
            let end = from + i;
            if !body[..end].ends_with('\\') {
                return BLOCK_QUOTE.len() + end + BLOCK_QUOTE.len();
            }
            from = end + BLOCK_QUOTE.len();
        }
        return tail.len();
    }

    let mut escaped = false;
    for (i, c) in tail.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return i + 1,
            _ => {}
        }
    }
    tail.len()
}

/// Puts the literals taken by [`mask_string_literals`] back in one pass.
fn unmask_string_literals(printed: &str, literals: &[&str]) -> String {
    let mut out = String::with_capacity(printed.len());
    let mut rest = printed;

    while let Some(pos) = rest.find(LITERAL_MARKER) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + LITERAL_MARKER.len()..];
        let digits = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        let literal = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|index| literals.get(index))
            .filter(|_| after[digits..].starts_with("__\""));
        if let Some(literal) = literal {
            out.push_str(literal);
            rest = &after[digits + 3..];
        } else {
            out.push_str(LITERAL_MARKER);
            rest = after;
        }
    }
    out.push_str(rest);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::types::UserKind;
    use serde_json::json;

    #[test]
    fn test_format_param_value_scalars() {
        assert_eq!(format_param_value(&true), "true");
        assert_eq!(format_param_value(&42_u64), "42");
        assert_eq!(format_param_value("a \"quoted\" word"), r#""a \"quoted\" word""#);
        assert_eq!(format_param_value(&Id::from("123")), r#""123""#);
        assert_eq!(format_param_value(&Id::from(123_u64)), "123");
    }

    #[test]
    fn test_format_ids() {
        assert_eq!(format_ids(&[]), "null");
        assert_eq!(format_ids(&[Id::from(1_u64), Id::from("2")]), r#"[1,"2"]"#);
    }

    #[test]
    fn test_format_enum_value() {
        assert_eq!(format_enum_value(Some(UserKind::Guests)), "guests");
        assert_eq!(format_enum_value::<UserKind>(None), "null");
    }

    #[test]
    fn test_monday_json_stringify_keeps_non_ascii() {
        let value = json!({"text": "Привіт"});
        assert_eq!(
            monday_json_stringify(Some(&value)),
            r#""{\"text\":\"Привіт\"}""#
        );
    }

    #[test]
    fn test_monday_json_stringify_output_is_a_graphql_string() {
        let value = json!({"status": {"label": "Done"}});
        let query = format!(
            "mutation {{ create_item (item_name: \"x\", board_id: 1, column_values: {}) {{ id }} }}",
            monday_json_stringify(Some(&value))
        );
        assert!(graphql_parse(&query).is_ok());
    }

    #[test]
    fn test_gather_params_empty() {
        assert_eq!(gather_params(&[("name", None)]), "");
    }

    #[test]
    fn test_graphql_parse_reports_syntax_errors() {
        let error = graphql_parse("query { boards (ids: ) { id } }").unwrap_err();
        assert!(!error.message.is_empty());
        assert_eq!(error.query, "query { boards (ids: ) { id } }");
    }

    fn create_update(body: &str) -> String {
        format!(
            "mutation {{ create_update (item_id: 1, body: {}) {{ id }} }}",
            format_param_value(body)
        )
    }

    #[test]
    fn test_graphql_parse_keeps_characters_outside_the_bmp() {
        let query = graphql_parse(&create_update("Great job 🎉")).unwrap();
        assert!(query.contains(r#"body: "Great job 🎉""#));
    }

    #[test]
    fn test_graphql_parse_keeps_control_character_escapes() {
        let query = graphql_parse(&create_update("Bug \u{1f} x")).unwrap();
        assert!(query.contains(r#"body: "Bug \u001f x""#));
    }

    #[test]
    fn test_graphql_parse_keeps_multi_line_strings_on_one_line() {
        let query = graphql_parse(&create_update("\n  indented\n\nend  ")).unwrap();
        assert!(query.contains(r#"body: "\n  indented\n\nend  ""#));
        assert!(!query.contains(r#"""""#));
    }

    #[test]
    fn test_graphql_parse_keeps_block_strings() {
        let query = graphql_parse(
            "mutation { create_update (item_id: 1, body: \"\"\"\n  say \"hi\" twice\n\"\"\") { id } }",
        )
        .unwrap();
        assert!(query.contains("body: \"\"\"\n  say \"hi\" twice\n\"\"\")"));
    }

    #[test]
    fn test_graphql_parse_ignores_quotes_in_comments() {
        let query = graphql_parse("query {\n  # the \"me\" field\n  me { name }\n}").unwrap();
        assert_eq!(query, graphql_parse("query { me { name } }").unwrap());
    }

    #[test]
    fn test_graphql_parse_keeps_literals_that_look_like_placeholders() {
        let body = format!("{LITERAL_MARKER}0__\" and {LITERAL_MARKER}1__\"");
        let query = graphql_parse(&format!(
            "mutation {{ a: create_update (item_id: 1, body: {}) {{ id }} b: create_update (item_id: 2, body: \"second\") {{ id }} }}",
            format_param_value(&body)
        ))
        .unwrap();
        assert!(query.contains(&format!("body: {}", format_param_value(&body))));
        assert!(query.contains(r#"body: "second""#));
    }

    #[test]
    fn test_graphql_parse_is_idempotent() {
        let once = graphql_parse("mutation ($file: File!) { add_file_to_update (update_id: 1, file: $file) { id } }").unwrap();
        let twice = graphql_parse(&once).unwrap();
        assert_eq!(once, twice);
    }
}
