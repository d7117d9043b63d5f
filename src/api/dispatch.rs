//! Fire-and-forget search dispatch
//!
//! The event loop never blocks on the network. A submitted search runs on
//! the rayon pool and its completion is sent back over a channel, which the
//! loop drains between frames. Completions arrive in the order the backend
//! answers, not the order the searches were submitted.

use super::{SearchApi, SearchRequest, SearchResult, RequestId};
use std::sync::Arc;
use std::sync::mpsc::Sender;

/// Outcome of one submitted search, delivered back to the event loop
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCompletion {
    /// Request this completion answers
    pub request_id: RequestId,
    /// Backend result (transport failures are folded into a failed result)
    pub result: SearchResult,
}

/// Starts searches without waiting for them
pub trait SearchDispatcher {
    /// Submit `request`; the completion arrives later on the loop's channel
    fn dispatch(&self, request: SearchRequest);
}

/// Dispatcher running each search as a task on the rayon pool
pub struct WorkerDispatcher {
    api: Arc<dyn SearchApi>,
    completions: Sender<SearchCompletion>,
}

impl WorkerDispatcher {
    /// Create a dispatcher sending completions to `completions`
    #[must_use]
    pub fn new(api: Arc<dyn SearchApi>, completions: Sender<SearchCompletion>) -> Self {
        Self { api, completions }
    }
}

impl std::fmt::Debug for WorkerDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerDispatcher").finish_non_exhaustive()
    }
}

impl SearchDispatcher for WorkerDispatcher {
    fn dispatch(&self, request: SearchRequest) {
        let api = Arc::clone(&self.api);
        let completions = self.completions.clone();

        rayon::spawn(move || {
            let result = api
                .search(&request.query)
                .unwrap_or_else(|e| SearchResult::failure(e.to_string()));

            // The loop is gone when the receiver is dropped; nothing to report to
            let _ = completions.send(SearchCompletion {
                request_id: request.id,
                result,
            });
        });
    }
}
