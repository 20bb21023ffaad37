pub mod codec;
pub mod daily_records;
pub mod pool;
pub mod profile;

pub use pool::{create_pool, run_migrations};
