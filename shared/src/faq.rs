use crate::model::Faq;

/// Global FAQ list in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqList {
    entries: Vec<Faq>,
}

impl FaqList {
    /// Wrap an already ordered list.
    pub fn new(entries: Vec<Faq>) -> Self {
        Self { entries }
    }

    /// Full list for the FAQ page.
    pub fn all(&self) -> &[Faq] {
        &self.entries
    }

    /// The first `n` entries (homepage preview). Shorter lists are returned whole.
    pub fn first_n(&self, n: usize) -> &[Faq] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Entries for `ids` in the order of `ids`; unknown ids are dropped.
    pub fn by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Faq> {
        ids.iter()
            .filter_map(|id| self.entries.iter().find(|faq| faq.id == id.as_ref()))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no FAQ is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
