use std::fmt;

use crate::error::AppError;
use super::model::{Document, Operation, Schema};

/// Structural problems that leave a usable model behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentWarning {
    MissingVersion,
    UnsupportedVersion(String),
    InvalidPath(String),
    MissingResponses { method: String, path: String },
    UnresolvedReference { location: String, reference: String },
}

impl fmt::Display for DocumentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentWarning::MissingVersion => write!(f, "missing `openapi` version field"),
            DocumentWarning::UnsupportedVersion(v) => write!(f, "unsupported document version {v}"),
            DocumentWarning::InvalidPath(p) => write!(f, "path {p:?} does not start with '/'"),
            DocumentWarning::MissingResponses { method, path } => {
                write!(f, "{method} {path} declares no responses")
            }
            DocumentWarning::UnresolvedReference { location, reference } => {
                write!(f, "{location}: cannot resolve {reference}")
            }
        }
    }
}

/// Parse a YAML or JSON API description into a [`Document`].
pub fn parse(content: &str) -> Result<Document, AppError> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Err(AppError::InvalidDocument("document is empty".into()));
    }
    let doc: Document = if trimmed.starts_with('{') {
        serde_json::from_str(content)?
    } else {
        serde_yaml::from_str(content)?
    };
    Ok(doc)
}

/// Collect every non-fatal structural problem in `doc`.
pub fn validate(doc: &Document) -> Vec<DocumentWarning> {
    let mut warnings = Vec::new();

    match (&doc.openapi, &doc.swagger) {
        (Some(v), _) if v.starts_with("3.") => {}
        (Some(v), _) => warnings.push(DocumentWarning::UnsupportedVersion(v.clone())),
        (None, Some(v)) => warnings.push(DocumentWarning::UnsupportedVersion(format!("swagger {v}"))),
        (None, None) => warnings.push(DocumentWarning::MissingVersion),
    }

    for (path, item) in doc.paths.iter() {
        if !path.starts_with('/') {
            warnings.push(DocumentWarning::InvalidPath(path.to_string()));
        }
        for param in &item.parameters {
            if doc.resolve_parameter(param).is_none() {
                unresolved(param.reference(), path, &mut warnings);
            }
        }
        for (method, op) in item.operations() {
            let location = format!("{method} {path}");
            if op.responses.is_empty() {
                warnings.push(DocumentWarning::MissingResponses {
                    method: method.to_string(),
                    path: path.to_string(),
                });
            }
            check_operation(doc, op, &location, &mut warnings);
        }
    }

    for (name, item) in doc.webhooks.iter() {
        for (method, op) in item.operations() {
            check_operation(doc, op, &format!("webhook {method} {name}"), &mut warnings);
        }
    }

    for (name, schema) in doc.components.schemas.iter() {
        check_schema(doc, schema, &format!("components.schemas.{name}"), &mut warnings);
    }

    warnings
}

fn check_operation(doc: &Document, op: &Operation, location: &str, out: &mut Vec<DocumentWarning>) {
    for param in &op.parameters {
        match doc.resolve_parameter(param) {
            Some(param) => {
                if let Some(schema) = &param.schema {
                    check_schema(doc, schema, location, out);
                }
            }
            None => unresolved(param.reference(), location, out),
        }
    }
    if let Some(body) = &op.request_body {
        match doc.resolve_request_body(body) {
            Some(body) => {
                for (_, media) in body.content.iter() {
                    if let Some(schema) = &media.schema {
                        check_schema(doc, schema, location, out);
                    }
                }
            }
            None => unresolved(body.reference(), location, out),
        }
    }
    for (_, response) in op.responses.iter() {
        match doc.resolve_response(response) {
            Some(response) => {
                for (_, media) in response.content.iter() {
                    if let Some(schema) = &media.schema {
                        check_schema(doc, schema, location, out);
                    }
                }
            }
            None => unresolved(response.reference(), location, out),
        }
    }
}

fn unresolved(reference: Option<&str>, location: &str, out: &mut Vec<DocumentWarning>) {
    if let Some(reference) = reference {
        out.push(DocumentWarning::UnresolvedReference {
            location: location.to_string(),
            reference: reference.to_string(),
        });
    }
}

/// Walks the inline tree of `schema`; references are checked but not followed.
fn check_schema(doc: &Document, schema: &Schema, location: &str, out: &mut Vec<DocumentWarning>) {
    if schema.reference.is_some() {
        if doc.resolve_schema(schema).is_none() {
            unresolved(schema.reference.as_deref(), location, out);
        }
        return;
    }
    for (_, prop) in schema.properties.iter() {
        check_schema(doc, prop, location, out);
    }
    if let Some(items) = &schema.items {
        check_schema(doc, items, location, out);
    }
    for branch in schema.all_of.iter().chain(&schema.one_of).chain(&schema.any_of) {
        check_schema(doc, branch, location, out);
    }
}
