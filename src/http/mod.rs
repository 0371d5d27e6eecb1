//! HTTP surface: server wiring and endpoint handlers.

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
