/// Which of the three catalogs the list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Endpoints,
    Webhooks,
    Components,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Endpoints => "Endpoints",
            ViewMode::Webhooks => "Webhooks",
            ViewMode::Components => "Components",
        }
    }

    /// Cycle order: Endpoints → Webhooks → Components → Endpoints.
    /// Webhooks is skipped when the document declares none.
    pub fn next(&self, has_webhooks: bool) -> ViewMode {
        match self {
            ViewMode::Endpoints if has_webhooks => ViewMode::Webhooks,
            ViewMode::Endpoints => ViewMode::Components,
            ViewMode::Webhooks => ViewMode::Components,
            ViewMode::Components => ViewMode::Endpoints,
        }
    }

    pub fn prev(&self, has_webhooks: bool) -> ViewMode {
        match self {
            ViewMode::Endpoints => ViewMode::Components,
            ViewMode::Webhooks => ViewMode::Endpoints,
            ViewMode::Components if has_webhooks => ViewMode::Webhooks,
            ViewMode::Components => ViewMode::Endpoints,
        }
    }
}
