//! Validated configuration values.

use validator::{Validate, ValidationErrors};

/// A value that passed its [`Validate`] constraints.
///
/// The only way to get one is [`Valid::new`], so code taking a
/// `Valid<GreetingConfig>` never has to check the config again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Valid<T> {
    value: T,
}

impl<T: Validate> Valid<T> {
    /// Validates `value`, keeping it only if every constraint holds.
    pub fn new(value: T) -> Result<Self, ValidationErrors> {
        value.validate()?;
        Ok(Self { value })
    }
}

impl<T> Valid<T> {
    /// Returns the validated value.
    pub fn inner(&self) -> &T {
        &self.value
    }
}
