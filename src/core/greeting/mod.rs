//! Greetings and the service that hands them out.

pub mod greeting_model;
pub mod greeting_service;

pub use greeting_model::Greeting;
pub use greeting_service::GreetingService;
