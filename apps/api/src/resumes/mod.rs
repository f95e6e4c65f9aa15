//! Resume records: persistence and HTTP handlers.

pub mod handlers;
pub mod store;
