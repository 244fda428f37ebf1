pub mod error;
pub mod jwt;
pub mod model;
pub mod password;
pub mod repo;
pub mod service;
pub mod store;
