//! Domain services orchestrating the ports.

mod authentication;

pub use authentication::{AuthenticationService, Credentials};
