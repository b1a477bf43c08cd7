use tracing::Level;

/// Installs a stderr fmt subscriber at a fixed `WARN` ceiling.
///
/// The level is not taken from `RUST_LOG`: this binary reads no environment.
/// A subscriber that is already installed is left in place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .try_init();
}
