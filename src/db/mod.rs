pub mod entries;
mod pool;
pub mod seed;

pub use pool::{create_pool, run_migrations};
