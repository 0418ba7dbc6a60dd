use super::format;
use super::model::{Document, RefOr};
use crate::state::item::{Component, ComponentKind, Endpoint, Webhook};

/// The three master sequences the browser lists, in document order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub endpoints: Vec<Endpoint>,
    pub components: Vec<Component>,
    pub webhooks: Vec<Webhook>,
}

pub fn extract(doc: &Document) -> Catalog {
    let mut endpoints = Vec::new();
    for (path, item) in doc.paths.iter() {
        for (method, op) in item.operations() {
            endpoints.push(Endpoint {
                method: method.to_string(),
                path: path.to_string(),
                details: format::operation_details(op, &item.parameters, doc),
                operation: op.clone(),
                folded: true,
            });
        }
    }

    let mut webhooks = Vec::new();
    for (name, item) in doc.webhooks.iter() {
        for (method, op) in item.operations() {
            webhooks.push(Webhook {
                name: name.to_string(),
                method: method.to_string(),
                details: format::operation_details(op, &item.parameters, doc),
                operation: op.clone(),
                folded: true,
            });
        }
    }

    let catalog = Catalog { endpoints, components: components(doc), webhooks };
    tracing::debug!(
        endpoints = catalog.endpoints.len(),
        components = catalog.components.len(),
        webhooks = catalog.webhooks.len(),
        "extracted catalog"
    );
    catalog
}

fn components(doc: &Document) -> Vec<Component> {
    let c = &doc.components;
    let mut out = Vec::new();

    for (name, schema) in c.schemas.iter() {
        let description = schema.description.as_deref().or(schema.title.as_deref()).unwrap_or("");
        out.push(Component::new(name, ComponentKind::Schema, description, format::schema_details(schema)));
    }
    for (name, value) in c.responses.iter() {
        out.push(match value {
            RefOr::Item(r) => Component::new(
                name,
                ComponentKind::Response,
                r.description.as_str(),
                format::response_details(r, doc),
            ),
            RefOr::Ref { reference } => reference_component(name, ComponentKind::Response, reference),
        });
    }
    for (name, value) in c.parameters.iter() {
        out.push(match value {
            RefOr::Item(p) => Component::new(
                name,
                ComponentKind::Parameter,
                p.description.as_deref().unwrap_or(""),
                format::parameter_details(p),
            ),
            RefOr::Ref { reference } => reference_component(name, ComponentKind::Parameter, reference),
        });
    }
    for (name, value) in c.request_bodies.iter() {
        out.push(match value {
            RefOr::Item(b) => Component::new(
                name,
                ComponentKind::RequestBody,
                b.description.as_deref().unwrap_or(""),
                format::request_body_details(b),
            ),
            RefOr::Ref { reference } => reference_component(name, ComponentKind::RequestBody, reference),
        });
    }
    for (name, value) in c.headers.iter() {
        out.push(match value {
            RefOr::Item(h) => Component::new(
                name,
                ComponentKind::Header,
                h.description.as_deref().unwrap_or(""),
                format::header_details(h),
            ),
            RefOr::Ref { reference } => reference_component(name, ComponentKind::Header, reference),
        });
    }
    for (name, value) in c.security_schemes.iter() {
        out.push(match value {
            RefOr::Item(s) => Component::new(
                name,
                ComponentKind::SecurityScheme,
                s.description.as_deref().unwrap_or(""),
                format::security_scheme_details(s),
            ),
            RefOr::Ref { reference } => {
                reference_component(name, ComponentKind::SecurityScheme, reference)
            }
        });
    }
    out
}

fn reference_component(name: &str, kind: ComponentKind, reference: &str) -> Component {
    Component::new(name, kind, "", format::reference_details(reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::loader::parse;
    use crate::state::item::ListItem;

    const DOC: &str = r##"
openapi: 3.1.0
info: {title: Shop, version: '2.0'}
paths:
  /orders:
    post:
      summary: Place order
      responses: {'201': {description: Created}}
    get:
      summary: List orders
      responses: {'200': {description: OK}}
  /orders/{id}:
    delete:
      responses: {'204': {description: Gone}}
webhooks:
  orderShipped:
    post:
      summary: Shipment notice
      responses: {'200': {description: OK}}
components:
  securitySchemes:
    bearer: {type: http, scheme: bearer}
  schemas:
    Order:
      type: object
      description: An order
      properties:
        id: {type: integer}
  responses:
    NotFound: {description: Missing}
  parameters:
    Limit: {name: limit, in: query, description: Page size}
    Alias: {$ref: '#/components/parameters/Limit'}
"##;

    #[test]
    fn test_endpoints_follow_path_then_method_order() {
        let catalog = extract(&parse(DOC).unwrap());
        let keys: Vec<String> = catalog.endpoints.iter().map(ListItem::key).collect();
        assert_eq!(keys, vec!["GET /orders", "POST /orders", "DELETE /orders/{id}"]);
        assert!(catalog.endpoints.iter().all(|e| e.folded));
        assert!(catalog.endpoints[0].details.starts_with("    Summary: List orders"));
    }

    #[test]
    fn test_webhooks_use_their_name() {
        let catalog = extract(&parse(DOC).unwrap());
        assert_eq!(catalog.webhooks.len(), 1);
        assert_eq!(catalog.webhooks[0].key(), "POST orderShipped");
    }

    #[test]
    fn test_components_in_section_order() {
        let catalog = extract(&parse(DOC).unwrap());
        let keys: Vec<String> = catalog.components.iter().map(ListItem::key).collect();
        assert_eq!(
            keys,
            vec![
                "schema:Order",
                "response:NotFound",
                "parameter:Limit",
                "parameter:Alias",
                "securityScheme:bearer",
            ]
        );
        assert_eq!(catalog.components[0].description, "An order");
        assert_eq!(catalog.components[2].description, "Page size");
        assert!(catalog.components[3].details.contains("#/components/parameters/Limit"));
    }

    #[test]
    fn test_empty_document_gives_empty_catalog() {
        let catalog = extract(&Document::default());
        assert!(catalog.endpoints.is_empty());
        assert!(catalog.components.is_empty());
        assert!(catalog.webhooks.is_empty());
    }
}
