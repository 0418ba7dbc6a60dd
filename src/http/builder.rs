use std::collections::BTreeMap;

use crate::document::model::{Document, Operation, SecurityRequirement};
use super::example::example_json;

pub const DEFAULT_SERVER: &str = "https://api.example.com";

/// Build a copy-pasteable `curl` invocation for one operation.
///
/// `path` is the request path for endpoints and the webhook name for webhooks.
/// The base URL is the document's first server, else `fallback_server`.
pub fn build_curl(
    method: &str,
    path: &str,
    op: &Operation,
    doc: &Document,
    fallback_server: &str,
) -> String {
    let base = doc
        .servers
        .first()
        .map(|s| s.url.as_str())
        .filter(|url| !url.is_empty())
        .unwrap_or(fallback_server);

    let mut curl = format!("curl -X {method} {}", shell_quote(&format!("{base}{path}")));

    for (key, value) in headers(op, doc) {
        curl.push_str(&format!(" \\\n  -H {}", shell_quote(&format!("{key}: {value}"))));
    }

    if let Some(body) = op.request_body.as_ref().and_then(|b| doc.resolve_request_body(b)) {
        if let Some(media) = body.content.get("application/json") {
            let json = example_json(media.schema.as_ref(), doc, 0);
            curl.push_str(&format!(" \\\n  -d {}", shell_quote(&json)));
        }
    }

    curl
}

/// Headers implied by the request body and the effective security requirements.
fn headers(op: &Operation, doc: &Document) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    if op.request_body.is_some() {
        headers.insert("Content-Type".to_string(), "application/json".to_string());
    }

    // An operation without its own `security` inherits the document's.
    let requirements: &[SecurityRequirement] = op
        .security
        .as_deref()
        .or(doc.security.as_deref())
        .unwrap_or_default();

    for requirement in requirements {
        for name in requirement.keys() {
            let Some(scheme) = doc.security_scheme(name) else {
                tracing::debug!(scheme = name, "security requirement names unknown scheme");
                continue;
            };
            match (scheme.scheme_type.as_str(), scheme.scheme.as_deref()) {
                ("http", Some(s)) if s.eq_ignore_ascii_case("bearer") => {
                    headers.insert("Authorization".to_string(), "Bearer YOUR_TOKEN".to_string());
                }
                ("http", Some(s)) if s.eq_ignore_ascii_case("basic") => {
                    headers.insert("Authorization".to_string(), "Basic YOUR_CREDENTIALS".to_string());
                }
                ("apiKey", _) if scheme.location.as_deref() == Some("header") => {
                    if let Some(header) = scheme.name.as_deref().filter(|n| !n.is_empty()) {
                        headers.insert(header.to_string(), "YOUR_API_KEY".to_string());
                    }
                }
                _ => {}
            }
        }
    }
    headers
}

/// Wrap in single quotes, closing and reopening around embedded quotes.
fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::loader::parse;

    const DOC: &str = r##"
openapi: 3.0.0
servers:
  - url: https://petstore.example.io/v1
security:
  - apiKeyAuth: []
paths:
  /pets:
    get:
      responses: {'200': {description: ok}}
    post:
      security:
        - bearerAuth: []
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                name: {type: string}
                age: {type: integer}
      responses: {'201': {description: created}}
  /public:
    get:
      security: []
      responses: {'200': {description: ok}}
components:
  securitySchemes:
    bearerAuth: {type: http, scheme: bearer}
    apiKeyAuth: {type: apiKey, in: header, name: X-API-Key}
"##;

    fn op<'a>(doc: &'a Document, path: &str, method: &str) -> &'a Operation {
        doc.paths
            .get(path)
            .unwrap()
            .operations()
            .find(|(m, _)| *m == method)
            .unwrap()
            .1
    }

    #[test]
    fn test_post_with_body_and_bearer() {
        let doc = parse(DOC).unwrap();
        let curl = build_curl("POST", "/pets", op(&doc, "/pets", "POST"), &doc, DEFAULT_SERVER);
        assert_eq!(
            curl,
            "curl -X POST 'https://petstore.example.io/v1/pets' \\\n  \
             -H 'Authorization: Bearer YOUR_TOKEN' \\\n  \
             -H 'Content-Type: application/json' \\\n  \
             -d '{ \"name\": \"string\", \"age\": 0 }'"
        );
    }

    #[test]
    fn test_document_security_applies_when_operation_has_none() {
        let doc = parse(DOC).unwrap();
        let curl = build_curl("GET", "/pets", op(&doc, "/pets", "GET"), &doc, DEFAULT_SERVER);
        assert_eq!(
            curl,
            "curl -X GET 'https://petstore.example.io/v1/pets' \\\n  -H 'X-API-Key: YOUR_API_KEY'"
        );
    }

    #[test]
    fn test_empty_operation_security_opts_out() {
        let doc = parse(DOC).unwrap();
        let curl = build_curl("GET", "/public", op(&doc, "/public", "GET"), &doc, DEFAULT_SERVER);
        assert_eq!(curl, "curl -X GET 'https://petstore.example.io/v1/public'");
    }

    #[test]
    fn test_fallback_server_and_basic_auth() {
        let doc = parse(
            r##"
openapi: 3.0.0
paths:
  /me:
    get:
      security: [{basic: []}]
      responses: {'200': {description: ok}}
components:
  securitySchemes:
    basic: {type: http, scheme: basic}
"##,
        )
        .unwrap();
        let curl = build_curl("GET", "/me", op(&doc, "/me", "GET"), &doc, "http://localhost:8080");
        assert_eq!(
            curl,
            "curl -X GET 'http://localhost:8080/me' \\\n  -H 'Authorization: Basic YOUR_CREDENTIALS'"
        );
    }

    #[test]
    fn test_non_json_body_sets_header_only() {
        let doc = parse(
            r##"
openapi: 3.0.0
paths:
  /upload:
    put:
      requestBody:
        content:
          application/octet-stream: {}
      responses: {'200': {description: ok}}
"##,
        )
        .unwrap();
        let curl = build_curl("PUT", "/upload", op(&doc, "/upload", "PUT"), &doc, DEFAULT_SERVER);
        assert_eq!(
            curl,
            "curl -X PUT 'https://api.example.com/upload' \\\n  -H 'Content-Type: application/json'"
        );
    }

    #[test]
    fn test_single_quotes_are_escaped() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }
}
