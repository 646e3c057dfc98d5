// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the logging sink as a trait so callers stay independent of any concrete sink.
//
// Boundaries
// - No concrete sink here. Adapters implement this trait in the adapters layer.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

use async_trait::async_trait;

/// Injectable logging service with a single operation.
///
/// By contract `write_message` always completes. Implementations hold no
/// mutable state of their own beyond a shared sink reference, so the
/// operation is safe to invoke concurrently from multiple callers.
#[async_trait]
pub trait MessageWriter: Send + Sync {
    /// Records `message` through the logging sink. Empty strings are valid.
    async fn write_message(&self, message: &str);
}
