use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional verbose mode.
///
/// When `verbose` is false, only error-level events are emitted so stdout
/// progress lines stay readable. When `verbose` is true, info-level and
/// above events are emitted as JSON on stderr.
pub fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(build_filter(verbose))
        .init();
}

fn build_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match log_directive(verbose).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

fn log_directive(verbose: bool) -> &'static str {
    if verbose {
        "lambda_prune=info"
    } else {
        "lambda_prune=error"
    }
}
