// Signal handling module
//
// SIGTERM and SIGINT (Ctrl+C) both stop the server. The notification is
// observed between accept iterations only; in-flight requests finish
// naturally.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Shutdown signal (SIGTERM, SIGINT)
    pub shutdown: Arc<Notify>,
    /// Whether shutdown has been requested
    pub shutdown_requested: Arc<AtomicBool>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the signal listener task (Unix).
#[cfg(unix)]
pub fn start_signal_handler(handler: &SignalHandler) {
    use tokio::signal::unix::{signal, SignalKind};

    let shutdown = Arc::clone(&handler.shutdown);
    let requested = Arc::clone(&handler.shutdown_requested);

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }

        requested.store(true, Ordering::SeqCst);
        shutdown.notify_waiters();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: &SignalHandler) {
    let shutdown = Arc::clone(&handler.shutdown);
    let requested = Arc::clone(&handler.shutdown_requested);

    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            requested.store(true, Ordering::SeqCst);
            shutdown.notify_waiters();
        }
    });
}
