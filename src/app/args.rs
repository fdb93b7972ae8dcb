use std::path::PathBuf;

use super::error::AppError;
use crate::engine::DEFAULT_CONCURRENCY;

const USAGE: &str = "Usage: itemproc <items.csv> [--concurrency N] [--verbose]";

/// Command-line configuration for the batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub concurrency: usize,
    pub verbose: bool,
}

impl CliArgs {
    /// Parse `argv` (program name first)
    pub fn parse(args: Vec<String>) -> Result<Self, AppError> {
        let mut input = None;
        let mut concurrency = DEFAULT_CONCURRENCY;
        let mut verbose = false;

        let mut rest = args.into_iter().skip(1);
        while let Some(arg) = rest.next() {
            match arg.as_str() {
                "--verbose" | "-v" => verbose = true,
                "--concurrency" | "-c" => {
                    let value = rest.next().ok_or_else(|| {
                        AppError::InvalidArguments(format!("{} requires a value", arg))
                    })?;
                    concurrency = parse_concurrency(&value)?;
                }
                flag if flag.starts_with('-') => {
                    return Err(AppError::InvalidArguments(format!(
                        "unknown option {}. {}",
                        flag, USAGE
                    )));
                }
                _ if input.is_none() => input = Some(PathBuf::from(arg)),
                _ => return Err(AppError::InvalidArguments(USAGE.to_string())),
            }
        }

        let input = input.ok_or_else(|| AppError::InvalidArguments(USAGE.to_string()))?;

        Ok(Self {
            input,
            concurrency,
            verbose,
        })
    }
}

fn parse_concurrency(value: &str) -> Result<usize, AppError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::InvalidArguments(format!(
            "concurrency must be a positive integer, got {}",
            value
        ))),
    }
}
