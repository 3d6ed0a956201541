// Library interface for devserve
// Lets integration tests and external callers drive the server components.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::{Config, ServerState};
pub use error::{BindError, ServeError};
pub use server::Server;
