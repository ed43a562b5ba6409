//! Terminal logging.
//!
//! Filter precedence: `--verbose` > `AWSSUME_LOG` > default `warn`.
//! Output goes to stderr so it never mixes with `list` output or the child's
//! stdout.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "AWSSUME_LOG";

pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(
            "debug,hyper=warn,hyper_util=warn,h2=warn,rustls=warn,aws_smithy_runtime=info",
        )
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
}
