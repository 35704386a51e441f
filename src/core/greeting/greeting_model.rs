//! The greeting value object.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A greeting handed between layers.
///
/// Both fields are fixed at construction. No validation is done here,
/// whoever builds a greeting decides what a sensible counter or template is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    /// Identifies the greeting.
    #[schema(example = 1)]
    counter: i64,
    /// The greeting text.
    #[schema(example = "Hello, %s!")]
    template: String,
}

impl Greeting {
    /// Constructs a new greeting.
    pub fn new(counter: i64, template: impl Into<String>) -> Self {
        Self {
            counter,
            template: template.into(),
        }
    }

    /// Returns the counter.
    pub fn counter(&self) -> i64 {
        self.counter
    }

    /// Returns the template.
    pub fn template(&self) -> &str {
        self.template.as_ref()
    }

    /// Consumes the greeting, returning its counter and template.
    pub fn into_parts(self) -> (i64, String) {
        (self.counter, self.template)
    }
}
