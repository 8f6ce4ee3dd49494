// Logging tests: subscriber initialization

use logostamp::config::LoggingConfig;
use logostamp::logging::init_subscriber;

/// The global subscriber can be installed once; a second attempt reports an
/// error instead of panicking.
#[test]
fn test_can_initialize_tracing_subscriber_once() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        json: true,
    };

    let first = init_subscriber(&config);
    assert!(first.is_ok(), "Failed to initialize subscriber: {:?}", first.err());

    tracing::info!(images = 3, "structured event after init");

    assert!(init_subscriber(&LoggingConfig::default()).is_err());
}
