use crate::core::domain::Configuration;

// logs go to stderr so they never interleave with the menu written to stdout
pub(crate) fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder
            .with_ansi(false)
            .json()
            .init();
    } else {
        builder
            .with_ansi(false)
            .without_time()
            .init();
    }
}
