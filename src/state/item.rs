use std::fmt;

use crate::document::model::Operation;

/// Shared capability of every row in the browser list.
pub trait ListItem {
    /// Identity that survives filtering.
    fn key(&self) -> String;
    fn folded(&self) -> bool;
    fn set_folded(&mut self, folded: bool);
    /// Preformatted detail block shown when unfolded.
    fn details(&self) -> &str;
    /// Type-specific fields the filter looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// `query` must already be lowercase.
    fn matches(&self, query: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| !field.is_empty() && field.to_lowercase().contains(query))
    }

    /// Rows the item occupies: the main line, plus detail lines and a blank
    /// separator when unfolded.
    fn height(&self) -> usize {
        if self.folded() {
            1
        } else {
            1 + self.details().lines().count() + 1
        }
    }
}

#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
    pub operation: Operation,
    pub details: String,
    pub folded: bool,
}

#[derive(Debug, Clone)]
pub struct Webhook {
    pub name: String,
    pub method: String,
    pub operation: Operation,
    pub details: String,
    pub folded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Schema,
    Response,
    Parameter,
    RequestBody,
    Header,
    SecurityScheme,
}

impl ComponentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Schema => "schema",
            ComponentKind::Response => "response",
            ComponentKind::Parameter => "parameter",
            ComponentKind::RequestBody => "requestBody",
            ComponentKind::Header => "header",
            ComponentKind::SecurityScheme => "securityScheme",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Component {
    pub name: String,
    pub kind: ComponentKind,
    pub description: String,
    pub details: String,
    pub folded: bool,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        kind: ComponentKind,
        description: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            details: details.into(),
            folded: true,
        }
    }
}

fn operation_text(op: &Operation) -> [&str; 2] {
    [
        op.summary.as_deref().unwrap_or(""),
        op.description.as_deref().unwrap_or(""),
    ]
}

impl ListItem for Endpoint {
    fn key(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    fn folded(&self) -> bool {
        self.folded
    }

    fn set_folded(&mut self, folded: bool) {
        self.folded = folded;
    }

    fn details(&self) -> &str {
        &self.details
    }

    fn search_fields(&self) -> Vec<&str> {
        let [summary, description] = operation_text(&self.operation);
        vec![self.path.as_str(), self.method.as_str(), summary, description]
    }
}

impl ListItem for Webhook {
    fn key(&self) -> String {
        format!("{} {}", self.method, self.name)
    }

    fn folded(&self) -> bool {
        self.folded
    }

    fn set_folded(&mut self, folded: bool) {
        self.folded = folded;
    }

    fn details(&self) -> &str {
        &self.details
    }

    fn search_fields(&self) -> Vec<&str> {
        let [summary, description] = operation_text(&self.operation);
        vec![self.name.as_str(), self.method.as_str(), summary, description]
    }
}

impl ListItem for Component {
    fn key(&self) -> String {
        format!("{}:{}", self.kind, self.name)
    }

    fn folded(&self) -> bool {
        self.folded
    }

    fn set_folded(&mut self, folded: bool) {
        self.folded = folded;
    }

    fn details(&self) -> &str {
        &self.details
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.kind.label(), self.description.as_str()]
    }
}

/// A borrowed row of whichever catalog is active.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Endpoint(&'a Endpoint),
    Webhook(&'a Webhook),
    Component(&'a Component),
}

impl<'a> Entry<'a> {
    pub fn item(&self) -> &'a dyn ListItem {
        match *self {
            Entry::Endpoint(ep) => ep,
            Entry::Webhook(hook) => hook,
            Entry::Component(comp) => comp,
        }
    }
}
