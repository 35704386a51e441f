//! Issues greetings and prints them as JSON lines.
//!
//! Usage: `greeting-model [COUNT]`

use greeting_model::{
    cli,
    core::greeting::GreetingService,
    infra::{config, logging},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    config::load_dotenv()?;
    let _guard = logging::init_logging()?;
    let config = config::load_config()?;

    let count = cli::parse_count(std::env::args().nth(1).as_deref())?;

    let service = GreetingService::from_config(&config.greeting);
    tracing::info!(count, template = service.template(), "Issuing greetings");

    cli::write_greetings(&service, count, std::io::stdout().lock())?;

    tracing::debug!(issued = service.issued(), "Done");
    Ok(())
}
