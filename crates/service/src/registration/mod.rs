//! Registration module: domain types, repository abstraction and the
//! orchestrating service.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::RegistrationService;
