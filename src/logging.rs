use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr fmt subscriber filtered by `RUST_LOG` plus `directive`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(parsed) => filter = filter.add_directive(parsed),
        Err(e) => eprintln!("ignoring invalid log directive '{}': {}", directive, e),
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}
