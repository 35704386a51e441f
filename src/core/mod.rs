//! The core module.
//!
//! Domain types and the services that create them.

pub mod greeting;
