//! Shared helpers for integration suites that need a live PostgreSQL.

pub mod pg_embed;

/// Returns true when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes`.
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Reports a cluster that failed to start.
///
/// Returns `None` with a skip marker when `SKIP_TEST_CLUSTER` is set and
/// panics otherwise, so a broken cluster fails CI instead of passing quietly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("embedded PostgreSQL failed to start: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
