// mdxsan/src/logger.rs
//! Logging setup for the `mdxsan` binary.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger` writing to stderr.
///
/// `level` overrides `RUST_LOG` when given; otherwise `RUST_LOG` applies and
/// falls back to `warn`. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
