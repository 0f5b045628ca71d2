use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use super::{ContentProvider, ContentState};

/// Receiving end of a one-shot background load.
pub struct ContentLoader {
    rx: Option<Receiver<ContentState>>,
}

/// Runs `provider.load()` on its own thread. Nothing waits for the thread;
/// if the loader is dropped first the result is discarded.
pub fn spawn_load(provider: ContentProvider) -> ContentLoader {
    let (tx, rx) = mpsc::channel();
    let spawned = thread::Builder::new()
        .name("content-load".to_string())
        .spawn(move || {
            let _ = tx.send(provider.load());
        });
    if let Err(err) = spawned {
        // The sender went down with the closure; `poll` reports Unavailable.
        log::warn!("spawn content loader: {}", err);
    }
    ContentLoader { rx: Some(rx) }
}

impl ContentLoader {
    /// Non-blocking. Yields the final state once, then `None` forever.
    pub fn poll(&mut self) -> Option<ContentState> {
        let rx = self.rx.as_ref()?;
        let out = match rx.try_recv() {
            Ok(state) => state,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => ContentState::Unavailable,
        };
        self.rx = None;
        Some(out)
    }

    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }
}
