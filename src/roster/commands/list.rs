use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::index::index_records;
use crate::records::RecordStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend, C: Clock>(store: &RecordStore<B, C>) -> CmdResult {
    CmdResult::default().with_listed_records(index_records(store.list()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use crate::store::memory::fixtures::{backend_with_students, open_store};

    #[test]
    fn lists_in_insertion_order() {
        let store = open_store(backend_with_students(&["John", "Amy"]));
        let result = run(&store);
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.listed_records[0].record.name, "John");
        assert_eq!(result.listed_records[1].index, 2);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = open_store(MemBackend::new());
        assert!(run(&store).listed_records.is_empty());
    }
}
