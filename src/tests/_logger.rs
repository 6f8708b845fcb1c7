use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initialize the test logger. This should be called at the beginning of
/// each test touching a database.
#[allow(dead_code)]
pub fn init_test_logger() {
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .with_target(true)
            .compact()
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    });
}
