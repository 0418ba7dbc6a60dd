use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Upper bound on `$ref` chains followed before giving up.
const MAX_REF_HOPS: usize = 8;

/// A string-keyed map that keeps the order keys appear in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(OrderedMap::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Either an inline object or a `$ref` pointing at one in `components`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    Ref {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Item(T),
}

impl<T> RefOr<T> {
    pub fn reference(&self) -> Option<&str> {
        match self {
            RefOr::Ref { reference } => Some(reference),
            RefOr::Item(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Document {
    pub openapi: Option<String>,
    pub swagger: Option<String>,
    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: OrderedMap<PathItem>,
    pub webhooks: OrderedMap<PathItem>,
    pub components: Components,
    pub security: Option<Vec<SecurityRequirement>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Server {
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathItem {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub patch: Option<Operation>,
    pub trace: Option<Operation>,
    pub parameters: Vec<RefOr<Parameter>>,
}

impl PathItem {
    /// Operations in canonical method order, paired with the upper-case method.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("GET", &self.get),
            ("PUT", &self.put),
            ("POST", &self.post),
            ("DELETE", &self.delete),
            ("OPTIONS", &self.options),
            ("HEAD", &self.head),
            ("PATCH", &self.patch),
            ("TRACE", &self.trace),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

/// Names of security schemes mapped to required scopes.
pub type SecurityRequirement = OrderedMap<Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<RefOr<Parameter>>,
    pub request_body: Option<RefOr<RequestBody>>,
    pub responses: OrderedMap<RefOr<Response>>,
    pub security: Option<Vec<SecurityRequirement>>,
    pub deprecated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub description: Option<String>,
    pub required: bool,
    pub deprecated: bool,
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    pub description: Option<String>,
    pub required: bool,
    pub content: OrderedMap<MediaType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediaType {
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Response {
    pub description: String,
    pub headers: OrderedMap<RefOr<Header>>,
    pub content: OrderedMap<MediaType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Header {
    pub description: Option<String>,
    pub required: bool,
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,
    pub description: Option<String>,
    pub scheme: Option<String>,
    pub bearer_format: Option<String>,
    #[serde(rename = "in")]
    pub location: Option<String>,
    pub name: Option<String>,
}

/// `type` is a single string in 3.0 and may be a list in 3.1.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

impl SchemaType {
    pub fn primary(&self) -> Option<&str> {
        match self {
            SchemaType::Single(t) => Some(t),
            SchemaType::Multiple(types) => types.first().map(String::as_str),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,
    pub format: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub example: Option<serde_json::Value>,
    #[serde(rename = "enum")]
    pub enum_values: Vec<serde_json::Value>,
    pub properties: OrderedMap<Schema>,
    pub required: Vec<String>,
    pub items: Option<Box<Schema>>,
    pub all_of: Vec<Schema>,
    pub one_of: Vec<Schema>,
    pub any_of: Vec<Schema>,
}

impl Schema {
    pub fn primary_type(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(SchemaType::primary)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Components {
    pub schemas: OrderedMap<Schema>,
    pub responses: OrderedMap<RefOr<Response>>,
    pub parameters: OrderedMap<RefOr<Parameter>>,
    pub request_bodies: OrderedMap<RefOr<RequestBody>>,
    pub headers: OrderedMap<RefOr<Header>>,
    pub security_schemes: OrderedMap<RefOr<SecurityScheme>>,
}

/// Extracts `Name` from `#/components/<section>/Name`.
pub fn ref_target<'a>(reference: &'a str, section: &str) -> Option<&'a str> {
    reference
        .strip_prefix("#/components/")?
        .strip_prefix(section)?
        .strip_prefix('/')
}

/// Last path segment of a reference, used as a display name.
pub fn ref_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

impl Document {
    pub fn resolve_schema<'a>(&'a self, schema: &'a Schema) -> Option<&'a Schema> {
        let mut current = schema;
        for _ in 0..MAX_REF_HOPS {
            match &current.reference {
                None => return Some(current),
                Some(reference) => {
                    current = self.components.schemas.get(ref_target(reference, "schemas")?)?;
                }
            }
        }
        None
    }

    pub fn resolve_parameter<'a>(&'a self, value: &'a RefOr<Parameter>) -> Option<&'a Parameter> {
        resolve_in(value, "parameters", &self.components.parameters)
    }

    pub fn resolve_request_body<'a>(
        &'a self,
        value: &'a RefOr<RequestBody>,
    ) -> Option<&'a RequestBody> {
        resolve_in(value, "requestBodies", &self.components.request_bodies)
    }

    pub fn resolve_response<'a>(&'a self, value: &'a RefOr<Response>) -> Option<&'a Response> {
        resolve_in(value, "responses", &self.components.responses)
    }

    pub fn resolve_header<'a>(&'a self, value: &'a RefOr<Header>) -> Option<&'a Header> {
        resolve_in(value, "headers", &self.components.headers)
    }

    pub fn resolve_security_scheme<'a>(
        &'a self,
        value: &'a RefOr<SecurityScheme>,
    ) -> Option<&'a SecurityScheme> {
        resolve_in(value, "securitySchemes", &self.components.security_schemes)
    }

    pub fn security_scheme(&self, name: &str) -> Option<&SecurityScheme> {
        self.resolve_security_scheme(self.components.security_schemes.get(name)?)
    }
}

fn resolve_in<'a, T>(
    value: &'a RefOr<T>,
    section: &str,
    table: &'a OrderedMap<RefOr<T>>,
) -> Option<&'a T> {
    let mut current = value;
    for _ in 0..MAX_REF_HOPS {
        match current {
            RefOr::Item(item) => return Some(item),
            RefOr::Ref { reference } => current = table.get(ref_target(reference, section)?)?,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_keeps_document_order() {
        let map: OrderedMap<u32> = serde_yaml::from_str("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(map.get("alpha"), Some(&2));
    }

    #[test]
    fn test_numeric_response_codes_become_string_keys() {
        let op: Operation =
            serde_yaml::from_str("responses:\n  200:\n    description: ok\n  default:\n    description: err\n")
                .unwrap();
        let codes: Vec<&str> = op.responses.keys().collect();
        assert_eq!(codes, vec!["200", "default"]);
    }

    #[test]
    fn test_ref_or_prefers_reference() {
        let value: RefOr<Parameter> =
            serde_yaml::from_str("$ref: '#/components/parameters/Limit'").unwrap();
        assert_eq!(value.reference(), Some("#/components/parameters/Limit"));
    }

    #[test]
    fn test_path_item_operations_in_canonical_order() {
        let item: PathItem = serde_yaml::from_str(
            "post: {summary: create}\nget: {summary: list}\ndelete: {summary: remove}\n",
        )
        .unwrap();
        let methods: Vec<&str> = item.operations().map(|(m, _)| m).collect();
        assert_eq!(methods, vec!["GET", "POST", "DELETE"]);
    }

    #[test]
    fn test_schema_type_accepts_list_form() {
        let schema: Schema = serde_yaml::from_str("type: [string, 'null']").unwrap();
        assert_eq!(schema.primary_type(), Some("string"));
    }

    #[test]
    fn test_resolve_schema_follows_chain() {
        let doc: Document = serde_yaml::from_str(
            r##"
components:
  schemas:
    Alias:
      $ref: '#/components/schemas/Pet'
    Pet:
      type: object
"##,
        )
        .unwrap();
        let start = Schema {
            reference: Some("#/components/schemas/Alias".into()),
            ..Default::default()
        };
        let resolved = doc.resolve_schema(&start).unwrap();
        assert_eq!(resolved.primary_type(), Some("object"));
    }

    #[test]
    fn test_resolve_schema_stops_on_cycle() {
        let doc: Document = serde_yaml::from_str(
            r##"
components:
  schemas:
    A:
      $ref: '#/components/schemas/B'
    B:
      $ref: '#/components/schemas/A'
"##,
        )
        .unwrap();
        let start = Schema {
            reference: Some("#/components/schemas/A".into()),
            ..Default::default()
        };
        assert!(doc.resolve_schema(&start).is_none());
    }

    #[test]
    fn test_ref_target_rejects_other_sections() {
        assert_eq!(ref_target("#/components/schemas/Pet", "schemas"), Some("Pet"));
        assert_eq!(ref_target("#/components/schemas/Pet", "responses"), None);
        assert_eq!(ref_target("other.yaml#/Pet", "schemas"), None);
        assert_eq!(ref_name("#/components/schemas/Pet"), "Pet");
    }
}
