use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `-v`.
pub(crate) fn init_logging(verbose: bool) {
  let fallback = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
  let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
