pub mod core {
    pub mod ports;
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_message_writer;
    }
    pub mod tracing_message_writer;
}

pub mod shell;
