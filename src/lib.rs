//! Apollo CRM MCP server.
//!
//! Exposes the Apollo REST API (accounts, contacts, deals, calls, tasks,
//! sequences, enrichment) as MCP tools over two transports: a persistent SSE
//! connection (`GET /sse` + `POST /messages/`) and a stateless streamable
//! HTTP endpoint (`/mcp`). Every tool is described as data in [`registry`]
//! and executed by one generic upstream adapter in [`apollo`].

pub mod apollo;
pub mod auth;
pub mod config;
pub mod dispatcher;
pub mod registry;
pub mod server;
pub mod transport;

pub use config::Config;
pub use server::run;
