use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{RecordSelector, resolve};
use crate::records::RecordStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend, C: Clock>(
    store: &RecordStore<B, C>,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let records = resolve(store.list(), selectors)?;
    Ok(CmdResult::default().with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{backend_with_students, open_store};

    #[test]
    fn views_by_position() {
        let store = open_store(backend_with_students(&["John", "Amy"]));
        let result = run(&store, &[RecordSelector::Index(2)]).unwrap();
        assert_eq!(result.listed_records[0].record.name, "Amy");
    }
}
