use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot gate for the unconfigured-origins operator warning.
///
/// The flag flips false→true at most once per gate; every later `warn` is a
/// no-op, even under concurrent first calls. Construct one gate per process
/// at wiring time and share it behind an `Arc`. There is no reset.
pub struct WarnOnceGate {
    fired: AtomicBool,
}

impl WarnOnceGate {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Emit the operator warning, at most once for the lifetime of this gate.
    pub fn warn(&self) {
        if self.try_fire() {
            tracing::warn!("no allowed origins configured; CORS requests will be rejected");
            tracing::warn!("set explicit allowed origins in production");
        }
    }

    /// Whether the warning has already been emitted.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Atomically claim the false→true transition. Returns `true` only for
    /// the single caller that wins the claim.
    fn try_fire(&self) -> bool {
        self.fired
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

impl Default for WarnOnceGate {
    fn default() -> Self {
        Self::new()
    }
}
