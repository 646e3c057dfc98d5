// Production implementation of the MessageWriter port.
//
// Purpose
// - Record each message as a single informational tracing event.
//
// Responsibilities
// - Carry the message as a structured field so the subscriber decides the format.

use crate::core::ports::MessageWriter;

pub struct TracingMessageWriter;

impl TracingMessageWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl MessageWriter for TracingMessageWriter {
    async fn write_message(&self, message: &str) {
        tracing::info!(msg = %message, "write_message called");
    }
}
