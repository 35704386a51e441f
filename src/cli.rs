//! Pieces of the `greeting-model` command line.

use crate::{
    core::greeting::GreetingService,
    infra::error::{AppError, AppResult},
};
use std::io::Write;

/// How many greetings are issued when no count is given.
pub const DEFAULT_COUNT: usize = 1;

/// Parses the optional `COUNT` argument.
pub fn parse_count(arg: Option<&str>) -> AppResult<usize> {
    match arg {
        Some(arg) => arg
            .parse()
            .map_err(|e| AppError::InvalidArgument(format!("count {arg:?}: {e}"))),
        None => Ok(DEFAULT_COUNT),
    }
}

/// Issues `count` greetings, writing each as one line of JSON.
pub fn write_greetings<W: Write>(
    service: &GreetingService,
    count: usize,
    mut out: W,
) -> AppResult<()> {
    for _ in 0..count {
        serde_json::to_writer(&mut out, &service.issue())?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
