pub mod completion_client;
pub mod config;
pub mod errors;
