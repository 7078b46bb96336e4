//! Command-line flags for the `whack` binary.
//!
//! Usage:
//!   whack [--config whack.toml] [--store settings.json] [--seed 42]

use std::path::PathBuf;

use crate::error::AppError;

/// Parsed command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub seed: Option<u64>,
    pub help: bool,
}

pub const USAGE: &str = "whack: whack-a-mole game loop speaking JSON lines\n\
    \n\
    Reads one command per line on stdin, e.g. {\"type\":\"Hit\",\"slot\":4},\n\
    and writes one state snapshot per line on stdout.\n\
    \n\
      --config <path>  TOML config file (optional)\n\
      --store <path>   Settings file holding the high score\n\
      --seed <n>       Fixed RNG seed\n";

impl CliArgs {
    pub fn parse<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--store" => parsed.store = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--seed" => {
                    let raw = value_for(&arg, args.next())?;
                    let seed = raw
                        .parse()
                        .map_err(|_| AppError::Usage(format!("--seed expects a number, got {raw}")))?;
                    parsed.seed = Some(seed);
                }
                "help" | "--help" | "-h" => parsed.help = true,
                other => return Err(AppError::Usage(format!("unknown argument: {other}"))),
            }
        }
        Ok(parsed)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Usage(format!("{flag} requires a value")))
}
