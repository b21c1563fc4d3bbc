use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::index::index_records;
use crate::records::RecordStore;
use crate::store::StorageBackend;

/// Name search. Hits keep their position in the full list so they can be
/// passed straight to `edit` or `delete`.
pub fn run<B: StorageBackend, C: Clock>(store: &RecordStore<B, C>, query: &str) -> CmdResult {
    let hits: Vec<i64> = store.search(query).iter().map(|r| r.id).collect();
    let listed = index_records(store.list())
        .into_iter()
        .filter(|dr| hits.contains(&dr.record.id))
        .collect();
    CmdResult::default().with_listed_records(listed)
}
