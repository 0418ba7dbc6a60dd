use super::item::ListItem;

/// An ordered master list plus an optional filtered view over it.
///
/// The view stores master indices, so fold flags only ever live on the master
/// items and survive any number of re-filters.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    filtered: Option<Vec<usize>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new(), filtered: None }
    }
}

impl<T: ListItem> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, filtered: None }
    }

    pub fn master(&self) -> &[T] {
        &self.items
    }

    /// Length of the active (possibly filtered) sequence.
    pub fn len(&self) -> usize {
        match &self.filtered {
            Some(indices) => indices.len(),
            None => self.items.len(),
        }
    }

    fn master_index(&self, index: usize) -> Option<usize> {
        match &self.filtered {
            Some(indices) => indices.get(index).copied(),
            None => (index < self.items.len()).then_some(index),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.master_index(index).map(|i| &self.items[i])
    }

    /// Rendered height of the active item at `index`; 1 when out of range.
    pub fn height_of(&self, index: usize) -> usize {
        self.get(index).map_or(1, ListItem::height)
    }

    /// Re-derive the active view. An empty query switches filtering off.
    pub fn apply_filter(&mut self, query: &str) {
        if query.is_empty() {
            self.filtered = None;
            return;
        }
        let query = query.to_lowercase();
        self.filtered = Some(
            self.items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.matches(&query))
                .map(|(i, _)| i)
                .collect(),
        );
    }

    /// Flip the fold flag of the active item at `index` on its master entry.
    pub fn toggle_fold(&mut self, index: usize) -> Option<&T> {
        let i = self.master_index(index)?;
        let item = &mut self.items[i];
        item.set_folded(!item.folded());
        Some(&self.items[i])
    }
}
