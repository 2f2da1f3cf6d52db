pub mod completion_client_errors;
pub mod config_errors;
