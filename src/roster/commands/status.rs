use crate::clock::Clock;
use crate::commands::{CmdResult, RosterPaths, RosterStatus};
use crate::counter::CounterCell;
use crate::records::RecordStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend, C: Clock>(
    store: &RecordStore<B, C>,
    counter: &CounterCell,
    paths: &RosterPaths,
) -> CmdResult {
    CmdResult::default().with_status(RosterStatus {
        students: store.len(),
        counter: counter.value(),
        data_dir: paths.data_dir.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::COUNTER_KEY;
    use crate::store::gateway::StorageGateway;
    use crate::store::memory::MemBackend;
    use crate::store::memory::fixtures::{backend_with_students, open_store};

    #[test]
    fn summarizes_students_and_counter() {
        let store = open_store(backend_with_students(&["John", "Amy"]));
        let counter =
            CounterCell::open(StorageGateway::new(MemBackend::new().with_entry(COUNTER_KEY, "5")));
        let status = run(&store, &counter, &RosterPaths::new("/tmp/roster"))
            .status
            .unwrap();
        assert_eq!(status.students, 2);
        assert_eq!(status.counter, 5);
    }
}
