//! Domain types shared by the quotes store, API server and client.

pub mod error;
pub mod quotes;
pub mod types;
