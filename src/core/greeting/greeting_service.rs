//! A service for handing out greetings.

use super::greeting_model::Greeting;
use crate::infra::{config::GreetingConfig, validation::Valid};
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::instrument;

/// Hands out greetings with a fresh counter and a fixed template.
///
/// Share it behind an [`std::sync::Arc`] to issue from several threads.
/// The counter wraps on overflow.
#[derive(Debug)]
pub struct GreetingService {
    initial_counter: i64,
    next: AtomicI64,
    template: String,
}

impl GreetingService {
    /// Constructs a service whose first greeting has `initial_counter`.
    pub fn new(initial_counter: i64, template: impl Into<String>) -> Self {
        Self {
            initial_counter,
            next: AtomicI64::new(initial_counter),
            template: template.into(),
        }
    }

    /// Constructs a service from validated configuration.
    pub fn from_config(config: &Valid<GreetingConfig>) -> Self {
        let config = config.inner();
        Self::new(config.initial_counter(), config.template())
    }

    /// Issues the next greeting.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn issue(&self) -> Greeting {
        let counter = self.next.fetch_add(1, Ordering::SeqCst);
        Greeting::new(counter, self.template.as_str())
    }

    /// Returns how many greetings were issued so far.
    pub fn issued(&self) -> i64 {
        self.next
            .load(Ordering::SeqCst)
            .wrapping_sub(self.initial_counter)
    }

    /// Returns the template every greeting carries.
    pub fn template(&self) -> &str {
        self.template.as_ref()
    }
}
