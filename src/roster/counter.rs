//! Persisted non-negative counter.
//!
//! The value lives in memory and changes synchronously. Persistence is handed
//! to a writer thread so callers never wait on storage. Pending writes are
//! coalesced: only the latest value reaches the backend.

use crate::error::StorageError;
use crate::store::gateway::StorageGateway;
use crate::store::{COUNTER_KEY, StorageBackend};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

enum WriterMsg {
    Persist(u64),
    Flush(Sender<Result<(), StorageError>>),
}

pub struct CounterCell {
    value: u64,
    tx: Option<Sender<WriterMsg>>,
    writer: Option<JoinHandle<()>>,
}

impl CounterCell {
    /// Loads the stored value (0 when absent or unreadable) and starts the writer.
    pub fn open<B: StorageBackend + 'static>(gateway: StorageGateway<B>) -> Self {
        let value = gateway.load_counter(COUNTER_KEY);
        let (tx, rx) = mpsc::channel();
        let writer = thread::Builder::new()
            .name("roster-counter-writer".into())
            .spawn(move || run_writer(gateway, rx));

        let (tx, writer) = match writer {
            Ok(handle) => (Some(tx), Some(handle)),
            Err(err) => {
                log::error!("event=counter_writer status=spawn_failed error={}", err);
                (None, None)
            }
        };

        Self { value, tx, writer }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn increment(&mut self) -> u64 {
        self.value = self.value.saturating_add(1);
        self.persist();
        self.value
    }

    /// Decrements unless already at zero.
    pub fn decrement(&mut self) -> u64 {
        self.value = self.value.saturating_sub(1);
        self.persist();
        self.value
    }

    pub fn reset(&mut self) -> u64 {
        self.value = 0;
        self.persist();
        self.value
    }

    /// Blocks until every queued write has been attempted. Returns the most
    /// recent write failure since the previous flush, if any.
    pub fn flush(&self) -> Result<(), StorageError> {
        let tx = self.tx.as_ref().ok_or(StorageError::WriterGone)?;
        let (ack_tx, ack_rx) = mpsc::channel();
        tx.send(WriterMsg::Flush(ack_tx))
            .map_err(|_| StorageError::WriterGone)?;
        ack_rx.recv().map_err(|_| StorageError::WriterGone)?
    }

    fn persist(&self) {
        let sent = self
            .tx
            .as_ref()
            .map(|tx| tx.send(WriterMsg::Persist(self.value)).is_ok())
            .unwrap_or(false);
        if !sent {
            log::warn!("event=counter_persist status=writer_gone value={}", self.value);
        }
    }
}

impl Drop for CounterCell {
    fn drop(&mut self) {
        // Closing the channel lets the writer finish what is queued and exit.
        self.tx.take();
        if let Some(handle) = self.writer.take() {
            let _ = handle.join();
        }
    }
}

fn run_writer<B: StorageBackend>(gateway: StorageGateway<B>, rx: Receiver<WriterMsg>) {
    let mut last_error: Option<StorageError> = None;
    let mut pending: Option<u64> = None;

    while let Ok(msg) = rx.recv() {
        let mut acks = Vec::new();
        match msg {
            WriterMsg::Persist(v) => pending = Some(v),
            WriterMsg::Flush(ack) => acks.push(ack),
        }
        // Coalesce whatever else is already queued.
        while let Ok(msg) = rx.try_recv() {
            match msg {
                WriterMsg::Persist(v) => pending = Some(v),
                WriterMsg::Flush(ack) => acks.push(ack),
            }
        }

        if let Some(value) = pending.take() {
            match gateway.save_counter(COUNTER_KEY, value) {
                Ok(()) => log::debug!("event=counter_persist status=ok value={}", value),
                Err(err) => {
                    log::warn!("event=counter_persist status=failed value={} error={}", value, err);
                    last_error = Some(err);
                }
            }
        }

        for ack in acks {
            let outcome = match last_error.take() {
                Some(err) => Err(err),
                None => Ok(()),
            };
            let _ = ack.send(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use std::sync::Arc;

    fn cell_with(backend: Arc<MemBackend>) -> CounterCell {
        CounterCell::open(StorageGateway::from_shared(backend))
    }

    #[test]
    fn starts_at_zero_without_stored_value() {
        let cell = cell_with(Arc::new(MemBackend::new()));
        assert_eq!(cell.value(), 0);
    }

    #[test]
    fn starts_from_stored_value() {
        let backend = Arc::new(MemBackend::new().with_entry(COUNTER_KEY, "41"));
        let mut cell = cell_with(backend);
        assert_eq!(cell.increment(), 42);
    }

    #[test]
    fn negative_stored_value_reads_as_zero() {
        let backend = Arc::new(MemBackend::new().with_entry(COUNTER_KEY, "-5"));
        assert_eq!(cell_with(backend).value(), 0);
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let mut cell = cell_with(Arc::new(MemBackend::new()));
        assert_eq!(cell.decrement(), 0);
        assert_eq!(cell.decrement(), 0);
    }

    #[test]
    fn increment_then_decrement_is_identity() {
        let backend = Arc::new(MemBackend::new().with_entry(COUNTER_KEY, "3"));
        let mut cell = cell_with(backend);
        cell.increment();
        assert_eq!(cell.decrement(), 3);
    }

    #[test]
    fn reset_always_zeroes() {
        let mut cell = cell_with(Arc::new(MemBackend::new()));
        for _ in 0..5 {
            cell.increment();
        }
        assert_eq!(cell.reset(), 0);
    }

    #[test]
    fn flush_persists_latest_value() {
        let backend = Arc::new(MemBackend::new());
        let mut cell = cell_with(Arc::clone(&backend));
        cell.increment();
        cell.increment();
        cell.increment();
        cell.flush().unwrap();
        assert_eq!(backend.raw(COUNTER_KEY).as_deref(), Some("3"));
    }

    #[test]
    fn drop_drains_pending_writes() {
        let backend = Arc::new(MemBackend::new());
        {
            let mut cell = cell_with(Arc::clone(&backend));
            cell.increment();
            cell.increment();
        }
        assert_eq!(backend.raw(COUNTER_KEY).as_deref(), Some("2"));
    }

    #[test]
    fn flush_reports_write_failure_once() {
        let backend = Arc::new(MemBackend::new());
        backend.set_simulate_write_error(true);
        let mut cell = cell_with(Arc::clone(&backend));
        cell.increment();
        assert!(cell.flush().is_err());
        assert_eq!(cell.value(), 1);
        assert!(cell.flush().is_ok());
    }
}
