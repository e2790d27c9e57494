/// Rendered state of a fetched collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    /// Nothing fetched yet.
    Pending,
    /// Fetched and empty; the view shows the list's empty-state message.
    Empty,
    Items(Vec<T>),
}

impl<T> Listing<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Items(items) => items,
            Listing::Pending | Listing::Empty => &[],
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Listing::Pending
    }
}
