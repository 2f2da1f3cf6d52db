pub mod auth;
pub mod board;
pub mod chess_move;
pub mod move_request;
pub mod user;
