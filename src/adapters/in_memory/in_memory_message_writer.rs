// In memory implementation of the MessageWriter port.
//
// Purpose
// - Support tests and local development without a real logging sink.
//
// Responsibilities
// - Record every message in call order and expose the recorded entries.

use crate::core::ports::MessageWriter;
use tokio::sync::RwLock;

pub struct InMemoryMessageWriter {
    entries: RwLock<Vec<String>>,
}

impl InMemoryMessageWriter {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub async fn entries(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }
}

#[async_trait::async_trait]
impl MessageWriter for InMemoryMessageWriter {
    async fn write_message(&self, message: &str) {
        self.entries.write().await.push(message.to_string());
    }
}
