//! Log output setup.

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` is honoured; anything it leaves unset logs at `info`. Calling
/// this more than once is harmless, later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
