/// Initialize logging (reads RUST_LOG env var, defaults to Info).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
