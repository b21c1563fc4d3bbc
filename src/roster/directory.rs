//! Read-only remote directory.
//!
//! A single unauthenticated GET against a JSON endpoint, keeping the first
//! `limit` entries. There is no retry: one failure is the answer.
//!
//! [`DirectoryFetcher::spawn`] runs the request on a worker thread and hands
//! back a [`FetchHandle`]. Cancelling (or dropping) the handle means the
//! result is thrown away when it arrives. Nothing here touches the record
//! store or the counter.

use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;
use url::Url;

pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_DIRECTORY_LIMIT: usize = 6;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// One person from the remote directory. Extra fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
}

impl DirectoryEntry {
    /// Up to two uppercase initials from the first letters of the name's words.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    agent: ureq::Agent,
    url: Url,
    limit: usize,
}

impl DirectoryFetcher {
    pub fn new(url: &str, limit: usize, timeout: Duration) -> Result<Self, FetchError> {
        let url = Url::parse(url)?;
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Ok(Self { agent, url, limit })
    }

    /// Performs the request on the calling thread.
    pub fn fetch(&self) -> Result<Vec<DirectoryEntry>, FetchError> {
        log::info!("event=directory_fetch status=start url={}", self.url);
        let response = self
            .agent
            .get(self.url.as_str())
            .set("Accept", "application/json")
            .call();

        let response = match response {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => {
                log::warn!("event=directory_fetch status=http_error code={}", code);
                return Err(FetchError::Status(code));
            }
            Err(ureq::Error::Transport(err)) => {
                log::warn!("event=directory_fetch status=transport_error error={}", err);
                return Err(FetchError::Transport(err.to_string()));
            }
        };

        let body = response
            .into_string()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let mut entries: Vec<DirectoryEntry> = serde_json::from_str(&body)?;
        entries.truncate(self.limit);

        log::info!("event=directory_fetch status=ok count={}", entries.len());
        Ok(entries)
    }

    /// Starts the request on a worker thread.
    pub fn spawn(&self) -> FetchHandle {
        let fetcher = self.clone();
        let cancelled = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();

        let worker_cancelled = Arc::clone(&cancelled);
        let spawned = thread::Builder::new()
            .name("roster-directory-fetch".into())
            .spawn(move || {
                let result = fetcher.fetch();
                if worker_cancelled.load(Ordering::SeqCst) {
                    log::debug!("event=directory_fetch status=discarded");
                    return;
                }
                let _ = tx.send(result);
            });

        if let Err(err) = spawned {
            log::error!("event=directory_fetch status=spawn_failed error={}", err);
        }

        FetchHandle { cancelled, rx }
    }
}

#[derive(Debug)]
pub enum FetchOutcome {
    Completed(Result<Vec<DirectoryEntry>, FetchError>),
    Cancelled,
}

/// Pending directory request. Dropping it cancels the request.
pub struct FetchHandle {
    cancelled: Arc<AtomicBool>,
    rx: Receiver<Result<Vec<DirectoryEntry>, FetchError>>,
}

impl FetchHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Waits for the worker. A cancelled handle reports `Cancelled` without
    /// waiting for the network.
    pub fn wait(self) -> FetchOutcome {
        if self.is_cancelled() {
            return FetchOutcome::Cancelled;
        }
        match self.rx.recv() {
            Ok(result) if !self.is_cancelled() => FetchOutcome::Completed(result),
            Ok(_) => FetchOutcome::Cancelled,
            Err(_) => FetchOutcome::Completed(Err(FetchError::WorkerGone)),
        }
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> DirectoryEntry {
        DirectoryEntry {
            id: 1,
            name: name.to_string(),
            email: "x@y.z".into(),
            phone: "1-770-736-8031".into(),
            username: None,
            website: None,
            company: None,
        }
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(entry("Leanne Graham").initials(), "LG");
        assert_eq!(entry("mrs. Dennis Schulist").initials(), "MD");
        assert_eq!(entry("Kurtis").initials(), "K");
        assert_eq!(entry("").initials(), "");
    }

    #[test]
    fn decodes_placeholder_shape() {
        let json = r#"[{"id":1,"name":"Leanne Graham","username":"Bret",
            "email":"Sincere@april.biz","phone":"1-770-736-8031 x56442",
            "website":"hildegard.org","address":{"city":"Gwenborough"},
            "company":{"name":"Romaguera-Crona","bs":"harness"}}]"#;
        let entries: Vec<DirectoryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].username.as_deref(), Some("Bret"));
        assert_eq!(entries[0].company.as_ref().unwrap().name, "Romaguera-Crona");
    }

    #[test]
    fn rejects_bad_url() {
        assert!(matches!(
            DirectoryFetcher::new("not a url", 6, Duration::from_secs(1)),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn cancelled_handle_reports_cancelled() {
        // Port 9 (discard) on localhost is not expected to answer quickly; the
        // outcome must not depend on it either way.
        let fetcher =
            DirectoryFetcher::new("http://127.0.0.1:9/users", 6, Duration::from_millis(200))
                .unwrap();
        let handle = fetcher.spawn();
        handle.cancel();
        assert!(matches!(handle.wait(), FetchOutcome::Cancelled));
    }
}
