use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber. Filter directives come from `BANDCLAMP_LOG`,
/// falling back to `bandclamp=warn`. Output goes to stderr so it never mixes
/// with the adjusted track on stdout.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BANDCLAMP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("bandclamp=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
