//! Preformatted detail blocks shown under an unfolded list item.

use super::model::{
    ref_name, Document, Header, MediaType, OrderedMap, Operation, Parameter, RefOr, RequestBody,
    Response, Schema, SecurityScheme,
};

const INDENT: &str = "    ";
const NESTED: &str = "      ";

/// Short type label: `Pet`, `array<Pet>`, `string(date-time)`.
pub fn schema_label(schema: &Schema) -> String {
    if let Some(reference) = &schema.reference {
        return ref_name(reference).to_string();
    }
    match schema.primary_type() {
        Some("array") => match &schema.items {
            Some(items) => format!("array<{}>", schema_label(items)),
            None => "array".to_string(),
        },
        Some(t) => match &schema.format {
            Some(format) => format!("{t}({format})"),
            None => t.to_string(),
        },
        None if !schema.properties.is_empty() => "object".to_string(),
        None if !schema.all_of.is_empty() => composite_label("allOf", &schema.all_of),
        None if !schema.one_of.is_empty() => composite_label("oneOf", &schema.one_of),
        None if !schema.any_of.is_empty() => composite_label("anyOf", &schema.any_of),
        None => "any".to_string(),
    }
}

fn composite_label(keyword: &str, branches: &[Schema]) -> String {
    let labels: Vec<String> = branches.iter().map(schema_label).collect();
    format!("{keyword}[{}]", labels.join(", "))
}

/// Appends `Label: text`, continuing multi-line text on indented lines.
fn push_text(out: &mut Vec<String>, label: &str, text: Option<&str>) {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return;
    };
    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        out.push(format!("{INDENT}{label}: {first}"));
    }
    for line in lines {
        out.push(format!("{NESTED}{}", line.trim_end()));
    }
}

fn push_content(out: &mut Vec<String>, content: &OrderedMap<MediaType>) {
    for (media, body) in content.iter() {
        let label = body.schema.as_ref().map_or_else(|| "any".to_string(), schema_label);
        out.push(format!("{NESTED}{media}: {label}"));
    }
}

fn parameter_line(param: &Parameter) -> String {
    let ty = param.schema.as_ref().map_or_else(|| "any".to_string(), schema_label);
    let mut line = format!("{NESTED}{} ({}, {ty})", param.name, param.location);
    if param.required {
        line.push_str(" required");
    }
    if param.deprecated {
        line.push_str(" deprecated");
    }
    if let Some(desc) = param.description.as_deref().and_then(|d| d.lines().next()) {
        line.push_str(" - ");
        line.push_str(desc.trim());
    }
    line
}

fn first_line(text: Option<&str>) -> &str {
    text.and_then(|t| t.lines().next()).map_or("", str::trim)
}

/// Detail block for an endpoint or webhook operation. `shared` are the
/// parameters declared on the enclosing path item.
pub fn operation_details(op: &Operation, shared: &[RefOr<Parameter>], doc: &Document) -> String {
    let mut out = Vec::new();
    push_text(&mut out, "Summary", op.summary.as_deref());
    push_text(&mut out, "Description", op.description.as_deref());
    push_text(&mut out, "Operation ID", op.operation_id.as_deref());
    if !op.tags.is_empty() {
        out.push(format!("{INDENT}Tags: {}", op.tags.join(", ")));
    }
    if op.deprecated {
        out.push(format!("{INDENT}Deprecated"));
    }

    let params: Vec<&RefOr<Parameter>> = shared.iter().chain(&op.parameters).collect();
    if !params.is_empty() {
        out.push(format!("{INDENT}Parameters:"));
        for param in params {
            match doc.resolve_parameter(param) {
                Some(p) => out.push(parameter_line(p)),
                None => out.push(format!(
                    "{NESTED}{} (unresolved)",
                    param.reference().map_or("?", ref_name)
                )),
            }
        }
    }

    if let Some(body) = &op.request_body {
        match doc.resolve_request_body(body) {
            Some(body) => {
                let required = if body.required { " (required)" } else { "" };
                out.push(format!("{INDENT}Request Body{required}:"));
                push_content(&mut out, &body.content);
            }
            None => out.push(format!(
                "{INDENT}Request Body: {} (unresolved)",
                body.reference().map_or("?", ref_name)
            )),
        }
    }

    if !op.responses.is_empty() {
        out.push(format!("{INDENT}Responses:"));
        for (code, response) in op.responses.iter() {
            let desc = match doc.resolve_response(response) {
                Some(r) => first_line(Some(r.description.as_str())).to_string(),
                None => format!("{} (unresolved)", response.reference().map_or("?", ref_name)),
            };
            out.push(format!("{NESTED}{code}: {desc}").trim_end().to_string());
        }
    }

    out.join("\n")
}

pub fn schema_details(schema: &Schema) -> String {
    let mut out = Vec::new();
    if let Some(reference) = &schema.reference {
        out.push(format!("{INDENT}Reference: {reference}"));
    }
    out.push(format!("{INDENT}Type: {}", schema_label(schema)));
    push_text(&mut out, "Description", schema.description.as_deref());
    if !schema.properties.is_empty() {
        out.push(format!("{INDENT}Properties:"));
        for (name, prop) in schema.properties.iter() {
            let required = if schema.required.iter().any(|r| r == name) { " (required)" } else { "" };
            out.push(format!("{NESTED}{name}: {}{required}", schema_label(prop)));
        }
    }
    if !schema.enum_values.is_empty() {
        let values: Vec<String> = schema.enum_values.iter().map(enum_text).collect();
        out.push(format!("{INDENT}Enum: {}", values.join(", ")));
    }
    if let Some(example) = &schema.example {
        out.push(format!("{INDENT}Example: {example}"));
    }
    out.join("\n")
}

fn enum_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn response_details(response: &Response, doc: &Document) -> String {
    let mut out = Vec::new();
    push_text(&mut out, "Description", Some(response.description.as_str()));
    if !response.content.is_empty() {
        out.push(format!("{INDENT}Content:"));
        push_content(&mut out, &response.content);
    }
    if !response.headers.is_empty() {
        out.push(format!("{INDENT}Headers:"));
        for (name, header) in response.headers.iter() {
            let ty = doc
                .resolve_header(header)
                .and_then(|h| h.schema.as_ref())
                .map_or_else(|| "any".to_string(), schema_label);
            out.push(format!("{NESTED}{name}: {ty}"));
        }
    }
    out.join("\n")
}

pub fn parameter_details(param: &Parameter) -> String {
    let mut out = vec![
        format!("{INDENT}Name: {}", param.name),
        format!("{INDENT}In: {}", param.location),
        format!(
            "{INDENT}Type: {}",
            param.schema.as_ref().map_or_else(|| "any".to_string(), schema_label)
        ),
        format!("{INDENT}Required: {}", param.required),
    ];
    if param.deprecated {
        out.push(format!("{INDENT}Deprecated"));
    }
    push_text(&mut out, "Description", param.description.as_deref());
    out.join("\n")
}

pub fn request_body_details(body: &RequestBody) -> String {
    let mut out = Vec::new();
    push_text(&mut out, "Description", body.description.as_deref());
    out.push(format!("{INDENT}Required: {}", body.required));
    if !body.content.is_empty() {
        out.push(format!("{INDENT}Content:"));
        push_content(&mut out, &body.content);
    }
    out.join("\n")
}

pub fn header_details(header: &Header) -> String {
    let mut out = vec![
        format!(
            "{INDENT}Type: {}",
            header.schema.as_ref().map_or_else(|| "any".to_string(), schema_label)
        ),
        format!("{INDENT}Required: {}", header.required),
    ];
    push_text(&mut out, "Description", header.description.as_deref());
    out.join("\n")
}

pub fn security_scheme_details(scheme: &SecurityScheme) -> String {
    let mut out = vec![format!("{INDENT}Type: {}", scheme.scheme_type)];
    push_text(&mut out, "Scheme", scheme.scheme.as_deref());
    push_text(&mut out, "Bearer Format", scheme.bearer_format.as_deref());
    push_text(&mut out, "In", scheme.location.as_deref());
    push_text(&mut out, "Name", scheme.name.as_deref());
    push_text(&mut out, "Description", scheme.description.as_deref());
    out.join("\n")
}

/// Detail block for a component that is itself only a `$ref`.
pub fn reference_details(reference: &str) -> String {
    format!("{INDENT}Reference: {reference}")
}
