// HTTP surface for the game catalog
// Routes under /jogos plus a health probe

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use server::ApiServer;
