use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr log subscriber, filtered by `RUST_LOG`.
///
/// Returns false if a global subscriber is already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init();
        assert!(!init());
    }
}
