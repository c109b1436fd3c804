//! Upstream call adapter for the Apollo REST API.
//!
//! One generic adapter issues every tool's HTTP request: [`request`] turns a
//! tool descriptor plus caller arguments into a [`CallSpec`], and [`client`]
//! executes it with the resolved credential. Outcomes are always values; the
//! three-way error taxonomy in [`error`] is preserved per call.

pub mod client;
pub mod error;
pub mod request;

pub use client::{ApolloClient, UpstreamPayload};
pub use error::ApolloError;
pub use request::{CallParams, CallSpec};
