use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifetime token for a view session.
///
/// The UI shell clones one of these into every service it mounts and calls
/// [`Liveness::revoke`] on teardown. In-flight requests are not cancelled;
/// a response arriving after revocation is simply discarded instead of being
/// applied to state that no longer has an owner.
#[derive(Debug, Clone)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn revoke(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
