//! # Stagepass Core
//!
//! The domain layer of the Stagepass user service.
//! This crate contains the business rules for registration, login and
//! role-gated access, with no dependency on storage or web frameworks.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::RepoError;
