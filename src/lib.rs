//! Game catalog HTTP service.
//!
//! Records (id, nome, produtora, preco) live behind a swappable storage
//! gateway: an in-memory map for local/dev and a Postgres-backed variant
//! for real deployments. The catalog service layers business rules
//! (uniqueness on (nome, produtora), existence checks) on top, and the
//! actix-web surface maps routes to service calls.

pub mod api;
pub mod catalog;
pub mod storage;
pub mod tracing;
pub mod util;
