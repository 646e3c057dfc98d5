// Composition root for the host.
//
// Responsibilities
// - Read config from the environment.
// - Expose the HTTP router and the ambient middleware to main.

pub mod config;
pub mod http;
