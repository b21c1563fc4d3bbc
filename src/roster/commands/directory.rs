use crate::commands::{CmdMessage, CmdResult};
use crate::directory::{DirectoryFetcher, FetchOutcome};
use crate::error::Result;

/// Fetches the remote directory on a worker and waits for it.
pub fn run(fetcher: &DirectoryFetcher) -> Result<CmdResult> {
    match fetcher.spawn().wait() {
        FetchOutcome::Completed(result) => {
            let entries = result?;
            let mut out = CmdResult::default();
            if entries.is_empty() {
                out.add_message(CmdMessage::info("The directory is empty."));
            }
            Ok(out.with_directory(entries))
        }
        FetchOutcome::Cancelled => {
            let mut out = CmdResult::default();
            out.add_message(CmdMessage::warning("Directory request cancelled."));
            Ok(out)
        }
    }
}
