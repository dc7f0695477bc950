//! Database layer - connection pool, schema and repositories
//!
//! - Connection pool with an explicit limit, no Arc<Mutex<Connection>>
//! - One statement per repository call
//! - Rely on DB constraints, no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{connect, create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
