use crate::shared::core::primitives::{EntityId, Record};

/// Insertion-ordered records. Every lookup is a linear scan.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &EntityId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Replaces the record with `id` by `change(old)` at the same position.
    pub fn replace_with(&mut self, id: &EntityId, change: impl FnOnce(T) -> T) -> Option<&T> {
        let index = self.position(id)?;
        let current = self.records[index].clone();
        self.records[index] = change(current);
        Some(&self.records[index])
    }

    pub fn remove(&mut self, id: &EntityId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    fn position(&self, id: &EntityId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}
