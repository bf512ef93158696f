//! Database connection pool management

mod postgres;

pub use postgres::{
    create_pool, DatabaseConfig, ACQUIRE_TIMEOUT_KEY, MAX_CONNECTIONS_KEY, MIN_CONNECTIONS_KEY,
    URL_KEY,
};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
