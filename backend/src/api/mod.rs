//! HTTP API module.
//!
//! Server, response types and log streaming for the analysis endpoint.

pub mod server;
pub mod types;
pub mod logs;

pub use server::{router, start_server};
pub use types::*;
pub use logs::*;
