//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with the group listing on stdout.
//! `CLASSDIVIDER_LOG` takes an `EnvFilter` directive (e.g. `debug` or
//! `classdivider::divider=trace`); without it the level is `warn`, or
//! `debug` when `--verbose` is passed.

use tracing_subscriber::EnvFilter;

use crate::env::Env;

/// Build the filter from the environment and the verbosity flag.
pub fn filter(env: &Env, verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    match env.var(crate::constants::ENV_LOG) {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|e| {
            eprintln!(
                "Warning: ignoring invalid {} value: {directive} ({e})",
                crate::constants::ENV_LOG
            );
            EnvFilter::new(default_level)
        }),
        Err(_) => EnvFilter::new(default_level),
    }
}

/// Install the global subscriber. Returns `false` when one was already
/// installed, in which case nothing changes.
pub fn init(env: &Env, verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(env, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}
