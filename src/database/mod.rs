mod connection;
mod schema;
mod seed;

pub use connection::{check_health, create_pool};
pub use schema::sync_schema;
pub use seed::{demo_products, seed_if_empty};
