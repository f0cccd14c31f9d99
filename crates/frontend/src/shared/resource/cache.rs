use contracts::domain::common::ResourceRecord;

/// Records currently on screen, in server response order.
///
/// Holds exactly one page: a successful fetch replaces the whole cache, local
/// mutations patch it in place. Ids are unique within the cache.
#[derive(Debug, Clone)]
pub struct ListCache<R: ResourceRecord> {
    items: Vec<R>,
}

impl<R: ResourceRecord> Default for ListCache<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R: ResourceRecord> ListCache<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<R> {
        self.items.clone()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|r| r.id() == id)
    }

    pub fn get(&self, id: i64) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Wholesale replacement with a fetched page. Keeps the first occurrence
    /// when the server ever hands back a duplicate id.
    pub fn replace_all(&mut self, items: Vec<R>) {
        self.items.clear();
        for item in items {
            if !self.contains(item.id()) {
                self.items.push(item);
            }
        }
    }

    /// Append a confirmed-created record; replaces in place when the id is
    /// somehow already present instead of introducing a duplicate.
    pub fn insert(&mut self, record: R) {
        if self.replace_by_id(record.id(), record.clone()) {
            return;
        }
        self.items.push(record);
    }

    /// Replace the record with `id`, preserving its position.
    /// Returns false when the id is not on the current page.
    pub fn replace_by_id(&mut self, id: i64, record: R) -> bool {
        match self.items.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Mutate the record with `id` in place. Returns false when absent.
    pub fn patch_by_id(&mut self, id: i64, patch: impl FnOnce(&mut R)) -> bool {
        match self.items.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                patch(record);
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. No-op (false) when it is already gone.
    pub fn remove_by_id(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        label: &'static str,
    }

    impl ResourceRecord for Row {
        fn id(&self) -> i64 {
            self.id
        }
    }

    fn row(id: i64, label: &'static str) -> Row {
        Row { id, label }
    }

    #[test]
    fn replace_all_swaps_the_page() {
        let mut cache = ListCache::new();
        cache.replace_all(vec![row(1, "a"), row(2, "b")]);
        cache.replace_all(vec![row(3, "c")]);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(3));
        assert!(!cache.contains(1));
    }

    #[test]
    fn replace_all_drops_duplicate_ids() {
        let mut cache = ListCache::new();
        cache.replace_all(vec![row(1, "first"), row(1, "second")]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(1).unwrap().label, "first");
    }

    #[test]
    fn insert_appends_or_replaces() {
        let mut cache = ListCache::new();
        cache.insert(row(1, "a"));
        cache.insert(row(2, "b"));
        assert_eq!(cache.len(), 2);

        cache.insert(row(1, "a2"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(1).unwrap().label, "a2");
    }

    #[test]
    fn replace_preserves_position() {
        let mut cache = ListCache::new();
        cache.replace_all(vec![row(1, "a"), row(2, "b"), row(3, "c")]);
        assert!(cache.replace_by_id(2, row(2, "b2")));
        assert_eq!(cache.as_slice()[1].label, "b2");
        assert!(!cache.replace_by_id(9, row(9, "x")));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn remove_is_a_noop_when_absent() {
        let mut cache = ListCache::new();
        cache.replace_all(vec![row(1, "a")]);
        assert!(cache.remove_by_id(1));
        assert!(!cache.remove_by_id(1));
        assert!(cache.is_empty());
    }
}
