mod config;
pub mod http;
mod store;
mod student;

pub use config::{Config, ConfigError, DEFAULT_PORT};
pub use http::{router, serve, ApiError, StudentResponse};
pub use store::{IdGenerator, SequentialIds, StoreError, StudentStore, TimestampIds};
pub use student::{seed, Student, StudentInput};
