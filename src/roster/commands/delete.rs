use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{RecordSelector, resolve};
use crate::records::RecordStore;
use crate::store::StorageBackend;

/// Deletes every selected record. Selectors are resolved up front, so
/// `delete 1 2` removes the first two records as listed before the command.
pub fn run<B: StorageBackend, C: Clock>(
    store: &mut RecordStore<B, C>,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let targets = resolve(store.list(), selectors)?;
    let mut removed = Vec::with_capacity(targets.len());

    for target in targets {
        if let Some(record) = store.delete(target.record.id) {
            removed.push(record);
        }
    }

    Ok(CmdResult::default()
        .with_affected_records(removed)
        .take_notifications(store))
}
