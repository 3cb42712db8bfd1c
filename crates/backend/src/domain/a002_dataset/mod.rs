pub mod repository;
pub mod schema_inference;
pub mod service;
