//! # Stagepass Infrastructure
//!
//! Concrete implementations of the ports defined in `stagepass-core`:
//! JWT token issuance, Argon2 password hashing, and the credential store
//! (SeaORM-backed PostgreSQL, with an in-memory fallback).
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external storage, in-memory credential store only
//! - `postgres` - PostgreSQL credential store via SeaORM

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::InMemoryUserRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresUserRepository;
