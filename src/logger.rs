use std::fmt;

/// Receives one line per negotiation step. Shared by every request, so
/// implementations must tolerate concurrent calls.
pub trait DebugLogger: Send + Sync {
    fn log(&self, args: fmt::Arguments<'_>);
}

/// Forwards trace lines to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl DebugLogger for TracingLogger {
    fn log(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(target: "cors_guard", "{}", args);
    }
}
