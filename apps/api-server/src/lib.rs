//! HTTP surface of the Stagepass user service: configuration, shared state,
//! handlers and error mapping. The binary in `main.rs` is a thin wrapper so
//! the API tests can build the same application in-process.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
