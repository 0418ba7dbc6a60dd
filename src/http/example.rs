use crate::document::model::{Document, Schema};

/// Nesting depth past which every value is rendered as `null`.
pub const MAX_DEPTH: usize = 3;

/// Render a compact example JSON value for `schema`.
///
/// Values come from the schema's own `example` when present, otherwise from
/// type-driven placeholders. References are followed through `doc`.
pub fn example_json(schema: Option<&Schema>, doc: &Document, depth: usize) -> String {
    if depth > MAX_DEPTH {
        return "null".to_string();
    }
    let Some(schema) = schema.and_then(|s| doc.resolve_schema(s)) else {
        return "{}".to_string();
    };

    if let Some(example) = &schema.example {
        return serde_json::to_string(example).unwrap_or_else(|_| "null".to_string());
    }

    match schema.primary_type() {
        Some("object") => {
            let props: Vec<String> = schema
                .properties
                .iter()
                .map(|(name, prop)| {
                    let value = match doc.resolve_schema(prop) {
                        Some(resolved) => example_json(Some(resolved), doc, depth + 1),
                        None => "\"example\"".to_string(),
                    };
                    format!("{}: {value}", quoted(name))
                })
                .collect();
            if props.is_empty() {
                "{}".to_string()
            } else {
                format!("{{ {} }}", props.join(", "))
            }
        }
        Some("array") => match schema.items.as_deref().and_then(|i| doc.resolve_schema(i)) {
            Some(items) => format!("[ {} ]", example_json(Some(items), doc, depth + 1)),
            None => "[]".to_string(),
        },
        Some("string") => {
            if let Some(first) = schema.enum_values.first() {
                return match first {
                    serde_json::Value::String(s) => quoted(s),
                    other => quoted(&other.to_string()),
                };
            }
            match schema.format.as_deref() {
                Some("date") => "\"2024-01-01\"".to_string(),
                Some("date-time") => "\"2024-01-01T00:00:00Z\"".to_string(),
                Some("email") => "\"user@example.com\"".to_string(),
                _ => "\"string\"".to_string(),
            }
        }
        Some("number" | "integer") => "0".to_string(),
        Some("boolean") => "false".to_string(),
        Some("null") => "null".to_string(),
        _ => schema
            .all_of
            .iter()
            .filter(|branch| doc.resolve_schema(branch).is_some())
            .map(|branch| example_json(Some(branch), doc, depth + 1))
            .find(|example| example != "{}" && example != "null")
            .unwrap_or_else(|| "{}".to_string()),
    }
}

fn quoted(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::loader::parse;

    fn schema(yaml: &str) -> Schema {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn render(yaml: &str) -> String {
        example_json(Some(&schema(yaml)), &Document::default(), 0)
    }

    #[test]
    fn test_missing_schema_is_empty_object() {
        assert_eq!(example_json(None, &Document::default(), 0), "{}");
    }

    #[test]
    fn test_depth_bound_yields_null() {
        assert_eq!(example_json(Some(&schema("type: string")), &Document::default(), 4), "null");
    }

    #[test]
    fn test_primitive_placeholders() {
        assert_eq!(render("type: string"), "\"string\"");
        assert_eq!(render("type: string\nformat: date"), "\"2024-01-01\"");
        assert_eq!(render("type: string\nformat: date-time"), "\"2024-01-01T00:00:00Z\"");
        assert_eq!(render("type: string\nformat: email"), "\"user@example.com\"");
        assert_eq!(render("type: string\nenum: [sold, available]"), "\"sold\"");
        assert_eq!(render("type: integer"), "0");
        assert_eq!(render("type: number"), "0");
        assert_eq!(render("type: boolean"), "false");
        assert_eq!(render("type: 'null'"), "null");
    }

    #[test]
    fn test_explicit_example_wins() {
        assert_eq!(render("type: integer\nexample: 42"), "42");
        assert_eq!(render("type: string\nexample: doggie"), "\"doggie\"");
        assert_eq!(render("type: object\nexample: {a: 1}"), "{\"a\":1}");
    }

    #[test]
    fn test_object_and_array() {
        assert_eq!(
            render("type: object\nproperties:\n  name: {type: string}\n  tags:\n    type: array\n    items: {type: string}\n"),
            "{ \"name\": \"string\", \"tags\": [ \"string\" ] }"
        );
        assert_eq!(render("type: object"), "{}");
        assert_eq!(render("type: array"), "[]");
    }

    #[test]
    fn test_unresolved_property_reference() {
        assert_eq!(
            render("type: object\nproperties:\n  owner: {$ref: '#/components/schemas/Nope'}\n"),
            "{ \"owner\": \"example\" }"
        );
    }

    #[test]
    fn test_self_reference_is_bounded() {
        let doc = parse(
            r##"
openapi: 3.0.0
components:
  schemas:
    Node:
      type: object
      properties:
        child: {$ref: '#/components/schemas/Node'}
"##,
        )
        .unwrap();
        let root = schema("$ref: '#/components/schemas/Node'");
        assert_eq!(
            example_json(Some(&root), &doc, 0),
            "{ \"child\": { \"child\": { \"child\": { \"child\": null } } } }"
        );
    }

    #[test]
    fn test_all_of_takes_first_informative_branch() {
        let doc = parse(
            r##"
openapi: 3.0.0
components:
  schemas:
    Empty: {type: object}
    Named:
      type: object
      properties:
        name: {type: string}
"##,
        )
        .unwrap();
        let composed = schema(
            "allOf:\n  - $ref: '#/components/schemas/Empty'\n  - $ref: '#/components/schemas/Named'\n",
        );
        assert_eq!(example_json(Some(&composed), &doc, 0), "{ \"name\": \"string\" }");
        assert_eq!(render("allOf: [{type: object}]"), "{}");
    }
}
