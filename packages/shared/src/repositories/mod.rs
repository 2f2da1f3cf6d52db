pub mod errors;
pub mod user_repository;
