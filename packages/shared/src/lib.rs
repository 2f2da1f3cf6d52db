pub mod clients;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
