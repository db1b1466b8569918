//! Tracing subscriber setup for the CLI.

use std::sync::Once;

/// Environment variable holding the log filter, e.g. `screengen_codegen=debug`.
pub const LOG_ENV: &str = "SCREENGEN_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once.
///
/// Does nothing unless `SCREENGEN_LOG` or `RUST_LOG` is set, so normal runs
/// pay no logging cost. Output goes to stderr as an indented span tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = if let Ok(directives) = std::env::var(LOG_ENV) {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
