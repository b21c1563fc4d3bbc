use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::index::{DisplayRecord, RecordSelector, resolve};
use crate::model::{StudentDraft, StudentPatch};
use crate::records::RecordStore;
use crate::store::StorageBackend;

/// Pre-populates a draft from the stored record, overlays `patch`, and submits
/// it as a full replacement.
pub fn run<B: StorageBackend, C: Clock>(
    store: &mut RecordStore<B, C>,
    selector: RecordSelector,
    patch: StudentPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(RosterError::Api(
            "Nothing to change: pass at least one of --name, --email, --phone, --gender".into(),
        ));
    }

    let target = resolve(store.list(), &[selector])?.remove(0);
    let draft = StudentDraft::from(&target.record).merge(patch);
    let updated = store.update(target.record.id, &draft)?;

    Ok(CmdResult::default()
        .with_listed_records(vec![DisplayRecord {
            index: target.index,
            record: updated.clone(),
        }])
        .with_affected_records(vec![updated])
        .take_notifications(store))
}
