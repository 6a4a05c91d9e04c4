pub mod app;
pub mod auth;
pub mod config;
pub mod courses;
pub mod db;
pub mod error;
pub mod root;
pub mod state;
pub mod users;
pub mod validation;
