pub mod postgres_service;
pub mod token;
pub mod user;
