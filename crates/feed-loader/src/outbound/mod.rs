//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no classification logic:
//!
//! - **http**: `reqwest`-backed implementation of the `HttpClient` port

pub mod http;
