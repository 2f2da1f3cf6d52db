pub mod auth_service;
pub mod errors;
pub mod move_service;
pub mod prompt_service;
pub mod user_service;
