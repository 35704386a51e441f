//! For reading application configuration.

use super::{error::AppResult, validation::Valid};
use config::{builder::DefaultState, ConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// The template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "Hello, %s!";

/// The first counter handed out when none is configured.
pub const DEFAULT_INITIAL_COUNTER: i64 = 1;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Greeting configuration.
    pub greeting: Valid<GreetingConfig>,
}

#[derive(Deserialize)]
struct RawConfig {
    greeting: GreetingConfig,
}

/// Greeting configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Validate)]
pub struct GreetingConfig {
    /// The template every issued greeting carries.
    #[validate(length(min = 1))]
    template: String,
    /// The counter of the first issued greeting.
    #[validate(range(min = 0))]
    initial_counter: i64,
}

impl GreetingConfig {
    /// Constructs a new, unvalidated, greeting configuration.
    pub fn new(template: impl Into<String>, initial_counter: i64) -> Self {
        Self {
            template: template.into(),
            initial_counter,
        }
    }

    /// The configured template.
    pub fn template(&self) -> &str {
        self.template.as_ref()
    }

    /// The configured initial counter.
    pub fn initial_counter(&self) -> i64 {
        self.initial_counter
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, DEFAULT_INITIAL_COUNTER)
    }
}

fn with_defaults() -> AppResult<ConfigBuilder<DefaultState>> {
    let builder = config::Config::builder()
        .set_default("greeting.template", DEFAULT_TEMPLATE)?
        .set_default("greeting.initial_counter", DEFAULT_INITIAL_COUNTER)?;
    Ok(builder)
}

fn build(builder: ConfigBuilder<DefaultState>) -> AppResult<Config> {
    let raw: RawConfig = builder.build()?.try_deserialize()?;
    Ok(Config {
        greeting: Valid::new(raw.greeting)?,
    })
}

/// Retrieve [`Config`] from the default configuration file and the environment.
///
/// The file `config` is optional. Environment variables look like
/// `APP__GREETING__TEMPLATE` and win over the file.
#[tracing::instrument]
pub fn load_config() -> AppResult<Config> {
    let builder = with_defaults()?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("app").separator("__"));
    build(builder)
}

/// Loads a `.env` file from the current directory or one of its parents.
///
/// A missing file is fine. A file that exists but does not parse is an error,
/// since a half-loaded file silently drops overrides.
pub fn load_dotenv() -> AppResult<()> {
    ignore_missing(dotenvy::dotenv())
}

/// Loads the `.env` file at `path`, with the same rules as [`load_dotenv`].
pub fn load_dotenv_from(path: &Path) -> AppResult<()> {
    ignore_missing(dotenvy::from_path(path))
}

fn ignore_missing<T>(result: dotenvy::Result<T>) -> AppResult<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => {
            tracing::debug!("No .env file found");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::{build, load_dotenv_from, with_defaults, GreetingConfig};
    use crate::infra::error::AppError;
    use config::{File, FileFormat};
    use std::fs;

    fn from_toml(toml: &str) -> Result<super::Config, AppError> {
        build(with_defaults().unwrap().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn defaults_apply_without_sources() {
        let config = from_toml("").unwrap();
        assert_eq!(&GreetingConfig::default(), config.greeting.inner());
    }

    #[test]
    fn file_overrides_defaults() {
        let config = from_toml(
            r#"
            [greeting]
            template = "Hej, %s!"
            initial_counter = 10
            "#,
        )
        .unwrap();
        assert_eq!("Hej, %s!", config.greeting.inner().template());
        assert_eq!(10, config.greeting.inner().initial_counter());
    }

    #[test]
    fn empty_template_is_rejected() {
        let result = from_toml(
            r#"
            [greeting]
            template = ""
            "#,
        );
        assert!(matches!(
            result,
            Err(AppError::Validation(msg)) if msg == "invalid field(s): template (length)"
        ));
    }

    #[test]
    fn negative_counter_is_rejected() {
        let result = from_toml(
            r#"
            [greeting]
            initial_counter = -5
            "#,
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn wrong_type_is_a_config_error() {
        let result = from_toml(
            r#"
            [greeting]
            initial_counter = "many"
            "#,
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn missing_dotenv_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv_from(&dir.path().join(".env")).is_ok());
    }

    #[test]
    fn dotenv_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "GREETING_MODEL_TEST_LOADED=\"Hej %s\"\n").unwrap();

        load_dotenv_from(&path).unwrap();

        assert_eq!(
            "Hej %s",
            std::env::var("GREETING_MODEL_TEST_LOADED").unwrap()
        );
    }

    #[test]
    fn malformed_dotenv_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "GREETING_MODEL_TEST_BROKEN='unterminated\nGREETING_MODEL_TEST_AFTER=after\n",
        )
        .unwrap();

        let result = load_dotenv_from(&path);

        assert!(matches!(result, Err(AppError::Dotenv(_))));
        assert!(std::env::var("GREETING_MODEL_TEST_AFTER").is_err());
    }
}
