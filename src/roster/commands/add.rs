use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayRecord;
use crate::model::StudentDraft;
use crate::records::RecordStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend, C: Clock>(
    store: &mut RecordStore<B, C>,
    draft: &StudentDraft,
) -> Result<CmdResult> {
    let record = store.add(draft)?;
    let index = store.len();

    Ok(CmdResult::default()
        .with_listed_records(vec![DisplayRecord {
            index,
            record: record.clone(),
        }])
        .with_affected_records(vec![record])
        .take_notifications(store))
}
