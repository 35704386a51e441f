//! Greetings passed between the layers of a service.
//!
//! # Examples
//!
//! ```rust
//! use greeting_model::core::greeting::Greeting;
//!
//! let greeting = Greeting::new(1, "Hello, %s!");
//! assert_eq!(1, greeting.counter());
//! assert_eq!("Hello, %s!", greeting.template());
//! ```
//!
//! Issuing greetings with a fresh counter.
//!
//! ```rust
//! use greeting_model::core::greeting::GreetingService;
//!
//! let service = GreetingService::new(1, "Hello, %s!");
//! assert_eq!(1, service.issue().counter());
//! assert_eq!(2, service.issue().counter());
//! ```

pub mod cli;
pub mod core;
pub mod infra;
